pub mod assignments;
pub mod athletes;
pub mod exercises;
pub mod health;
pub mod sessions;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /exercises                                  list, create (admin)
/// /exercises/{id}                             get, update, delete (admin)
///
/// /templates                                  list, create (admin)
/// /templates/{id}                             get, update, delete (admin)
/// /templates/{id}/exercises                   add prescribed exercise (admin)
///
/// /assignments                                list by week, create (admin)
/// /assignments/{id}                           get
/// /assignments/{id}/session                   start or fetch session (POST)
///
/// /sessions/{id}                              get with logs
/// /sessions/{id}/complete                     complete (POST)
/// /sessions/{id}/logs                         list logs
/// /sessions/{id}/logs/{exercise_id}           upsert log (PUT)
///
/// /athletes/{id}/progress                     weekly progress summary
/// /athletes/{id}/readiness                    list, upsert (PUT)
/// /athletes/{id}/readiness/color              color for a day
/// /athletes/{id}/calendar                     colors for a date range
/// /athletes/{id}/acwr                         acute:chronic workload ratio
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/exercises", exercises::router())
        .nest("/templates", templates::router())
        .nest("/assignments", assignments::router())
        .nest("/sessions", sessions::router())
        .nest("/athletes", athletes::router())
}
