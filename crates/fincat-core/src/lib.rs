//! Core domain for the fincat stock watchlist demo
//!
//! This crate holds everything the chat bot and the HTTP surface share:
//!
//! - `Stock`: the record tracked per ticker symbol
//! - `StockStore`: the in-memory, insertion-ordered collection of records
//! - `Command`: the parsed chat command (total classification, never fails)
//! - `execute`: applies a command to the store and produces the reply plus
//!   a full snapshot of the list
//! - `ChatRequest` / `ChatReply`: the wire types of `POST /chat`
//!
//! The crate performs no I/O. Commands are deterministically pattern-matched;
//! unrecognized input, missing targets, and duplicate adds are all reported
//! through the reply string rather than as errors (nothing in this crate
//! panics or returns `Err` on user input).
//!
//! # Example
//!
//! ```rust
//! use fincat_core::{execute, Command, StockStore};
//!
//! let mut store = StockStore::new();
//! let outcome = execute(Command::parse("add AAPL Apple Inc 195.3"), &mut store);
//! assert!(outcome.reply.starts_with("Added AAPL"));
//! assert_eq!(outcome.stocks.len(), 1);
//! ```

pub mod chat;
pub mod command;
pub mod executor;
pub mod stock;
pub mod store;

// Re-export main types for convenience
pub use chat::{ChatReply, ChatRequest};
pub use command::Command;
pub use executor::execute;
pub use stock::Stock;
pub use store::StockStore;
