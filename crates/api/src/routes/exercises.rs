//! Route definitions for the exercise catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exercises::list).post(exercises::create))
        .route(
            "/{id}",
            get(exercises::get_by_id)
                .put(exercises::update)
                .delete(exercises::delete),
        )
}
