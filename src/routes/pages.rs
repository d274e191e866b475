//! Page handlers — the rendering layer over the router gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation handler does the same three steps: read `currentUser`
//! fresh from the session store, ask `gate::resolve` for a decision, and turn
//! the decision into a response. The session-mutating handlers (`submit_login`
//! and `logout`) are the store's only writers.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::gate::{self, RouteDecision};
use crate::services::session;
use crate::state::AppState;
use crate::surfaces;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Session token from the cookie jar, if the browser sent one.
fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .filter(|token| !token.is_empty())
}

/// Fresh `currentUser` read for this navigation. Never cached: login and
/// logout can change the value between requests.
fn current_user(state: &AppState, jar: &CookieJar) -> Option<String> {
    session_token(jar).and_then(|token| state.sessions.current_user(&token))
}

/// Turn a routing decision into a response.
fn render(decision: RouteDecision, user: Option<&str>) -> Response {
    match decision {
        RouteDecision::Login => Html(surfaces::login_page()).into_response(),
        RouteDecision::Authenticated => {
            Html(surfaces::authenticated_page(user.unwrap_or_default())).into_response()
        }
        // Temporary redirect (307): the browser does not keep a history entry
        // on the gated path, so Back does not loop into the gate again.
        RouteDecision::RedirectTo(target) => Redirect::temporary(target).into_response(),
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /login` — login surface, shown regardless of session state.
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let user = current_user(&state, &jar);
    render(gate::resolve(gate::LOGIN_PATH, user.as_deref()), user.as_deref())
}

/// `GET /chat` — authenticated composition, or redirect to `/login`.
pub async fn chat_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let user = current_user(&state, &jar);
    render(gate::resolve(gate::CHAT_PATH, user.as_deref()), user.as_deref())
}

/// Catch-all for every other path: same redirect as an unauthenticated
/// `/chat`, no distinct not-found page.
pub async fn fallback(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Response {
    let user = current_user(&state, &jar);
    render(gate::resolve(uri.path(), user.as_deref()), user.as_deref())
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
}

/// `POST /login` — the login surface's success path: record `currentUser`
/// for this session, set the cookie, and navigate to `/chat`.
pub async fn submit_login(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::extract::Form(form): axum::extract::Form<LoginForm>,
) -> Response {
    // Reuse the browser's existing session token when it has one, so a repeat
    // login replaces the session value instead of orphaning the old entry.
    let token = session_token(&jar).unwrap_or_else(session::generate_token);

    let username = form.username.trim();
    if let Err(e) = state.sessions.set_current_user(&token, username) {
        tracing::debug!(error = %e, "login rejected");
        return (StatusCode::BAD_REQUEST, "username required").into_response();
    }
    tracing::info!(user = username, "login");

    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure());

    (jar.add(cookie), Redirect::temporary(gate::CHAT_PATH)).into_response()
}

/// `POST /logout` — clear the session, expire the cookie, back to `/login`.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = session_token(&jar) {
        state.sessions.clear(&token);
    }

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);

    (jar.add(cookie), Redirect::temporary(gate::LOGIN_PATH)).into_response()
}

/// `GET /api/session/me` — current session value as JSON. Absent is not an
/// error; the field is simply null.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Json<serde_json::Value> {
    let user = current_user(&state, &jar);
    Json(serde_json::json!({ "currentUser": user }))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
