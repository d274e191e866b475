//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the session store behind the `SessionProvider` trait, so handlers
//! read and write session state without knowing the backing implementation.

use std::sync::Arc;

use crate::services::session::{MemorySessionStore, SessionProvider};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Default state backed by the in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
