//! Router assembly.
//!
//! # Responsibility
//! - Wire the notes endpoints under `/api` plus the root health probe.
//! - Apply the CORS policy the browser client relies on.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;

/// Builds the full application router over the given state.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/:id", delete(handlers::delete_note));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        // Single trusted browser client; the API stays fully CORS-open.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
