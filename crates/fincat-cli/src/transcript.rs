//! Client-side chat transcript
//!
//! The server keeps no chat history beyond a single request; whatever the
//! user wants to scroll back through lives here, bounded.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Maximum number of exchanges to keep in memory
const MAX_TRANSCRIPT_SIZE: usize = 100;

/// A single exchange with the bot
#[derive(Debug, Clone)]
pub struct TranscriptTurn {
    /// What the user typed
    pub user_input: String,
    /// The bot's reply
    pub reply: String,
    /// When the exchange happened
    pub timestamp: DateTime<Utc>,
}

/// Bounded in-memory transcript of the chat session
#[derive(Debug, Default)]
pub struct Transcript {
    turns: VecDeque<TranscriptTurn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an exchange, dropping the oldest once the bound is reached.
    pub fn add_turn(&mut self, user_input: String, reply: String) {
        self.turns.push_back(TranscriptTurn {
            user_input,
            reply,
            timestamp: Utc::now(),
        });
        while self.turns.len() > MAX_TRANSCRIPT_SIZE {
            self.turns.pop_front();
        }
    }

    /// The last `n` exchanges, oldest first.
    pub fn last_turns(&self, n: usize) -> Vec<&TranscriptTurn> {
        let skip = self.turns.len().saturating_sub(n);
        self.turns.iter().skip(skip).collect()
    }

    /// Number of recorded exchanges.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
