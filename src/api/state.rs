//! Application state for the HR record store API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::store::{RecordStore, SharedStore};

/// Shared application state.
///
/// Holds the one record store every handler reads from and writes to.
/// All access goes through the store's single lock, so commands from
/// concurrent requests are applied one at a time.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
}

impl AppState {
    /// Creates a new application state owning the given store.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: SharedStore::new(store),
        }
    }

    /// Returns the shared store handle.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}
