// ABOUTME: Per-user keyed in-memory storage shared by the domain services
// ABOUTME: Sharded concurrent map from user ID to that user's collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

/// Collection of type `T` owned per user
///
/// Uses `DashMap` for fine-grained locking instead of a global `Mutex`. Closures
/// passed to [`UserStore::read`] and [`UserStore::write`] run while the user's
/// shard is locked and must not call back into the same store.
pub struct UserStore<T> {
    state: Arc<DashMap<Uuid, T>>,
}

impl<T: Default> UserStore<T> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(DashMap::new()),
        }
    }

    /// Run `f` against the user's collection; users with no data see `T::default()`
    pub fn read<R>(&self, user_id: Uuid, f: impl FnOnce(&T) -> R) -> R {
        match self.state.get(&user_id) {
            Some(entry) => f(entry.value()),
            None => f(&T::default()),
        }
    }

    /// Run `f` against the user's collection, creating it on first write
    pub fn write<R>(&self, user_id: Uuid, f: impl FnOnce(&mut T) -> R) -> R {
        let mut entry = self.state.entry(user_id).or_default();
        f(entry.value_mut())
    }

    /// Number of users with stored data
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.state.len()
    }
}

impl<T: Default> Default for UserStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for UserStore<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for UserStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserStore")
            .field("users", &self.state.len())
            .finish()
    }
}
