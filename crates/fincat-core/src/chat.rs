//! Wire types for the chat endpoint

use crate::stock::Stock;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw chat message, e.g. "add AAPL Apple 195.3"
    pub message: String,
}

/// Outcome of one chat command.
///
/// Every execution path, including the failure replies, carries the full
/// current stock snapshot so the client can resynchronize its view in one
/// round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Human-readable description of what happened
    pub reply: String,
    /// Full snapshot of the store after the command ran
    pub stocks: Vec<Stock>,
}
