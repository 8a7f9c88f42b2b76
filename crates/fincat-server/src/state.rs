//! Shared application state

use crate::error::ApiError;
use fincat_core::StockStore;
use std::sync::{Arc, RwLock};

/// Store shared across handlers.
///
/// One writer at a time across the chat and CRUD routes; reads may run
/// concurrently with reads. The lock is only ever held across pure
/// computation, never across an await point. A poisoned lock surfaces as an
/// internal error instead of a panic.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<StockStore>>,
}

impl AppState {
    /// Create state around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around a pre-populated store.
    pub fn with_store(store: StockStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a closure against the store under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&StockStore) -> T) -> Result<T, ApiError> {
        let guard = self
            .store
            .read()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))?;
        Ok(f(&guard))
    }

    /// Run a closure against the store under the write lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut StockStore) -> T) -> Result<T, ApiError> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {e}")))?;
        Ok(f(&mut guard))
    }
}
