pub mod error;
pub mod handlers;

use crate::core::compliance::MatchPolicy;
use axum::Router;
use axum::routing::get;
use chrono::FixedOffset;
use tower_http::cors::CorsLayer;

/// Shared read-only request context. Handlers open their own SQLite
/// connection per request; only the path and policy knobs are shared.
#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
    pub offset: FixedOffset,
    pub policy: MatchPolicy,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get_today_worker", get(handlers::get_today_worker))
        .route("/get_all_worker", get(handlers::get_all_worker))
        .route("/get_scan", get(handlers::get_scan))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
