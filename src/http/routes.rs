use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all API routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/defaults", get(handlers::get_defaults))
        // Session lifecycle
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        // Session actions
        .route(
            "/sessions/:session_id/participants",
            post(handlers::add_participant),
        )
        .route(
            "/sessions/:session_id/minutes",
            post(handlers::generate_minutes).get(handlers::get_minutes_markdown),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API router plus the single-page form served from `static_dir`
pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    create_router(state).fallback_service(ServeDir::new(static_dir))
}
