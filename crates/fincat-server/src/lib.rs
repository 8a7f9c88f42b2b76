//! HTTP surface for the fincat stock watchlist demo
//!
//! Serves the embedded single-page frontend at `/`, the stock list and its
//! direct CRUD routes under `/stocks`, and the chat bot at `/chat`. All
//! handlers share one in-memory [`fincat_core::StockStore`] behind a single
//! read/write lock; nothing is persisted across restarts.

pub mod config;
pub mod error;
pub mod frontend;
pub mod routes;
pub mod state;

// Re-export main types for convenience
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
