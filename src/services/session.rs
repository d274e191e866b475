//! Session storage and token management.
//!
//! ARCHITECTURE
//! ============
//! Each browser session is identified by a random token carried in an HttpOnly
//! cookie. The store keeps exactly one value per token: `currentUser`, the
//! logged-in user identifier. The login handler is the sole writer; the router
//! gate re-reads the value on every navigation rather than caching it, since
//! login and logout can change it between requests.
//!
//! The store sits behind the `SessionProvider` trait so tests and future
//! backends can swap the implementation without touching the routes.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{PoisonError, RwLock};

use rand::Rng;
use thiserror::Error;

/// Rejected writes to the session store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A non-empty `currentUser` is the sole authorization signal, so an
    /// empty identifier must never be stored.
    #[error("user identifier must not be empty")]
    EmptyUser,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Per-session key-value state, keyed by session token.
///
/// `current_user` must be consulted fresh at every route evaluation; the
/// value is shared mutable state and callers may not assume it is unchanged
/// between reads.
pub trait SessionProvider: Send + Sync {
    /// Read the `currentUser` value for this session, if any.
    fn current_user(&self, token: &str) -> Option<String>;

    /// Record a successful login for this session.
    fn set_current_user(&self, token: &str, user: &str) -> Result<(), SessionError>;

    /// Drop the session entirely (logout, or the browser session ending).
    fn clear(&self, token: &str);
}

/// In-memory `SessionProvider`. Sessions live for the process lifetime and
/// vanish on restart, matching per-browser-session scoping — nothing here is
/// meant to survive a redeploy.
#[derive(Default)]
pub struct MemorySessionStore {
    users: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionProvider for MemorySessionStore {
    fn current_user(&self, token: &str) -> Option<String> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(token).cloned()
    }

    fn set_current_user(&self, token: &str, user: &str) -> Result<(), SessionError> {
        if user.is_empty() {
            return Err(SessionError::EmptyUser);
        }
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.insert(token.to_owned(), user.to_owned());
        Ok(())
    }

    fn clear(&self, token: &str) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.remove(token);
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
