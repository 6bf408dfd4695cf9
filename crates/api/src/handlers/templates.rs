//! Handlers for the `/templates` resource.
//!
//! A template owns its prescribed exercises; reads return the template with
//! those exercises in position order, each joined with the exercise name.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldhouse_core::error::CoreError;
use fieldhouse_core::types::DbId;
use fieldhouse_core::validation::validate_input;
use fieldhouse_db::models::template::{
    AddTemplateExercise, CreateTemplate, TemplateWithExercises, UpdateTemplate,
};
use fieldhouse_db::repositories::{ExerciseRepo, TemplateRepo};
use fieldhouse_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{created, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject exercise references that are not in the catalog.
async fn ensure_exercises_exist(pool: &DbPool, ids: &[DbId]) -> AppResult<()> {
    let missing = ExerciseRepo::find_missing(pool, ids).await?;
    if !missing.is_empty() {
        let listed: Vec<String> = missing.iter().map(ToString::to_string).collect();
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown exercise id(s): {}",
            listed.join(", ")
        ))));
    }
    Ok(())
}

async fn load_with_exercises(pool: &DbPool, id: DbId) -> AppResult<TemplateWithExercises> {
    TemplateRepo::find_by_id_with_exercises(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutTemplate", id)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/templates
pub async fn list(_user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// POST /api/v1/templates
///
/// Exercises given in the body are stored at positions `0..n`.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let exercise_ids: Vec<DbId> = input.exercises.iter().map(|e| e.exercise_id).collect();
    ensure_exercises_exist(&state.pool, &exercise_ids).await?;

    let template = TemplateRepo::create(&state.pool, &input).await?;
    let full = load_with_exercises(&state.pool, template.id).await?;

    tracing::info!(
        user_id = admin.ctx.user_id,
        template_id = template.id,
        exercise_count = full.exercises.len(),
        "Workout template created",
    );

    Ok(created(full))
}

/// GET /api/v1/templates/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = load_with_exercises(&state.pool, id).await?;
    Ok(Json(DataResponse { data: template }))
}

/// PUT /api/v1/templates/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let template = TemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutTemplate", id)))?;

    tracing::info!(user_id = admin.ctx.user_id, template_id = id, "Workout template updated");

    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/templates/{id}
///
/// Prescribed exercises cascade. Fails with 409 while assignments still
/// reference the template.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TemplateRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("WorkoutTemplate", id)));
    }

    tracing::info!(user_id = admin.ctx.user_id, template_id = id, "Workout template deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/templates/{id}/exercises
///
/// Without an explicit `position` the exercise is appended after the last.
pub async fn add_exercise(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddTemplateExercise>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    TemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutTemplate", id)))?;
    ensure_exercises_exist(&state.pool, &[input.exercise_id]).await?;

    let entry = TemplateRepo::add_exercise(&state.pool, id, &input).await?;

    tracing::info!(
        user_id = admin.ctx.user_id,
        template_id = id,
        exercise_id = entry.exercise_id,
        position = entry.position,
        "Exercise added to template",
    );

    Ok(created(entry))
}
