//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three navigations exist: `/login`, `/chat`, and everything else. The
//! catch-all is registered as the router fallback so the gate sees the raw
//! requested path. Session lifecycle endpoints (`POST /login`,
//! `POST /logout`, `GET /api/session/me`) live beside them.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login", get(pages::login_page).post(pages::submit_login))
        .route("/chat", get(pages::chat_page))
        .route("/logout", post(pages::logout))
        .route("/api/session/me", get(pages::me))
        .route("/healthz", get(healthz))
        .fallback(pages::fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
