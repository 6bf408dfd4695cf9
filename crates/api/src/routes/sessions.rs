//! Route definitions for workout sessions.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET  /{id}                     -> get_by_id
/// POST /{id}/complete            -> complete
/// GET  /{id}/logs                -> list_logs
/// PUT  /{id}/logs/{exercise_id}  -> upsert_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(sessions::get_by_id))
        .route("/{id}/complete", post(sessions::complete))
        .route("/{id}/logs", get(sessions::list_logs))
        .route("/{id}/logs/{exercise_id}", put(sessions::upsert_log))
}
