//! Handlers for the `/exercises` catalog.
//!
//! Any authenticated caller may read the catalog; writes require admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldhouse_core::error::CoreError;
use fieldhouse_core::types::DbId;
use fieldhouse_core::validation::validate_input;
use fieldhouse_db::models::exercise::{CreateExercise, UpdateExercise};
use fieldhouse_db::repositories::ExerciseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// GET /api/v1/exercises
pub async fn list(_user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let exercises = ExerciseRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: exercises }))
}

/// POST /api/v1/exercises
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateExercise>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let exercise = ExerciseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = admin.ctx.user_id,
        exercise_id = exercise.id,
        name = %exercise.name,
        "Exercise created",
    );

    Ok(created(exercise))
}

/// GET /api/v1/exercises/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let exercise = ExerciseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Exercise", id)))?;
    Ok(Json(DataResponse { data: exercise }))
}

/// PUT /api/v1/exercises/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExercise>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let exercise = ExerciseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Exercise", id)))?;

    tracing::info!(user_id = admin.ctx.user_id, exercise_id = id, "Exercise updated");

    Ok(Json(DataResponse { data: exercise }))
}

/// DELETE /api/v1/exercises/{id}
///
/// Fails with 409 while any template or log still references the exercise.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ExerciseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Exercise", id)));
    }

    tracing::info!(user_id = admin.ctx.user_id, exercise_id = id, "Exercise deleted");

    Ok(StatusCode::NO_CONTENT)
}
