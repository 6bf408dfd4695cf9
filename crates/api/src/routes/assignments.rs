//! Route definitions for weekly assignments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET  /                -> list
/// POST /                -> create
/// GET  /{id}            -> get_by_id
/// POST /{id}/session    -> ensure_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assignments::list).post(assignments::create))
        .route("/{id}", get(assignments::get_by_id))
        .route("/{id}/session", post(assignments::ensure_session))
}
