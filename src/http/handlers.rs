//! Read-only JSON endpoints. Route names match what the shop-floor
//! dashboards already call.
//!
//! rusqlite is synchronous, so each fetch runs on the blocking pool
//! with a connection opened for that request.

use crate::core::compliance;
use crate::db::{DbPool, queries};
use crate::errors::AppError;
use crate::http::AppState;
use crate::http::error::ApiError;
use crate::models::scan::ScanEvent;
use crate::models::status::WorkerStatus;
use crate::models::worker::Worker;
use crate::utils::date::{day_window_utc, today_in};
use axum::Json;
use axum::extract::State;

async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError(AppError::Server(e.to_string())))?
        .map_err(ApiError)
}

/// GET /get_today_worker — per-worker gear status derived from today's
/// scans, where "today" is the plant's local calendar day.
pub async fn get_today_worker(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkerStatus>>, ApiError> {
    let statuses = run_blocking(move || {
        let pool = DbPool::new(&state.db_path)?;
        let workers = queries::load_workers(&pool.conn)?;
        let (from, to) = day_window_utc(today_in(state.offset), state.offset);
        let scans = queries::load_scans_between(&pool.conn, &from, &to)?;
        tracing::debug!(
            workers = workers.len(),
            scans = scans.len(),
            "computed today's status"
        );
        Ok(compliance::compute(&workers, &scans, state.policy))
    })
    .await?;
    Ok(Json(statuses))
}

/// GET /get_all_worker — the enrollment roster, no derived fields.
pub async fn get_all_worker(
    State(state): State<AppState>,
) -> Result<Json<Vec<Worker>>, ApiError> {
    let workers = run_blocking(move || {
        let pool = DbPool::new(&state.db_path)?;
        queries::load_workers(&pool.conn)
    })
    .await?;
    Ok(Json(workers))
}

/// GET /get_scan — raw scan events for today's window, oldest first.
pub async fn get_scan(State(state): State<AppState>) -> Result<Json<Vec<ScanEvent>>, ApiError> {
    let scans = run_blocking(move || {
        let pool = DbPool::new(&state.db_path)?;
        let (from, to) = day_window_utc(today_in(state.offset), state.offset);
        queries::load_scans_between(&pool.conn, &from, &to)
    })
    .await?;
    Ok(Json(scans))
}

/// GET /health — liveness probe, no database touch.
pub async fn health() -> &'static str {
    "ok"
}
