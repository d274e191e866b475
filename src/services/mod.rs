//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session state and its invariants so route handlers can
//! stay focused on cookie plumbing and response rendering.

pub mod session;
