//! The record store: single owner of all HR collections.
//!
//! [`RecordStore`] holds one [`EmployeeAggregate`](crate::models::EmployeeAggregate)
//! per employee and exposes point lookups plus the mutation commands
//! (add, update, delete employee and decide leave request).
//!
//! The store itself is a plain value mutated through `&mut self`. Hosts
//! that share it across threads wrap it in a [`SharedStore`], which puts a
//! single mutex around all three collections.

mod commands;
mod record_store;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use record_store::RecordStore;

/// A store shared between threads behind one lock.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<RecordStore>>,
}

impl SharedStore {
    /// Wraps a store for sharing.
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store for the duration of one command or derivation.
    ///
    /// Commands validate before they mutate, so a store whose lock was
    /// poisoned by a panicking holder is still consistent and is handed out.
    pub fn lock(&self) -> MutexGuard<'_, RecordStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
