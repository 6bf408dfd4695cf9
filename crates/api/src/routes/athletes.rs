//! Per-athlete monitoring routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{analytics, readiness};
use crate::state::AppState;

/// Routes mounted at `/athletes`.
///
/// ```text
/// GET /{id}/progress         -> analytics::progress
/// GET /{id}/readiness        -> readiness::list
/// PUT /{id}/readiness        -> readiness::upsert
/// GET /{id}/readiness/color  -> readiness::color
/// GET /{id}/calendar         -> readiness::calendar
/// GET /{id}/acwr             -> analytics::acwr
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/progress", get(analytics::progress))
        .route(
            "/{id}/readiness",
            get(readiness::list).put(readiness::upsert),
        )
        .route("/{id}/readiness/color", get(readiness::color))
        .route("/{id}/calendar", get(readiness::calendar))
        .route("/{id}/acwr", get(analytics::acwr))
}
