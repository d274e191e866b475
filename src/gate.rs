//! Router gate — the pure routing decision.
//!
//! DESIGN
//! ======
//! Route resolution is a plain function of (path, session read) returning a
//! tagged decision. The rendering layer in `routes::pages` consumes the
//! decision; nothing here touches HTTP, cookies, or shared state, which keeps
//! every branch testable without a running server.

/// Outcome of evaluating one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the login surface.
    Login,
    /// Render the authenticated composition: home background, chat overlay.
    Authenticated,
    /// Redirect without leaving a history entry on the gated path.
    RedirectTo(&'static str),
}

pub const LOGIN_PATH: &str = "/login";
pub const CHAT_PATH: &str = "/chat";

/// Map a requested path and the current session value to a decision.
///
/// `current_user` must be read fresh from the session store for every call —
/// the login handler is the sole writer and the value can change between
/// navigations. First matching rule wins:
///
/// 1. `/login` renders the login surface regardless of session state.
/// 2. `/chat` with a non-empty user renders home + chat together.
/// 3. `/chat` without one redirects to `/login`.
/// 4. Anything else redirects to `/login` (same target as rule 3 on purpose;
///    there is no distinct not-found page).
///
/// Absent, empty, or otherwise unusable session values all take the
/// unauthenticated branch. None of them are errors.
#[must_use]
pub fn resolve(path: &str, current_user: Option<&str>) -> RouteDecision {
    match path {
        LOGIN_PATH => RouteDecision::Login,
        CHAT_PATH if is_authenticated(current_user) => RouteDecision::Authenticated,
        _ => RouteDecision::RedirectTo(LOGIN_PATH),
    }
}

/// A non-empty `currentUser` value is the sole authorization signal.
#[must_use]
pub fn is_authenticated(current_user: Option<&str>) -> bool {
    current_user.is_some_and(|user| !user.is_empty())
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
