//! Handlers for `/sessions`: completion and exercise logs.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use fieldhouse_core::error::CoreError;
use fieldhouse_core::session::CompletionOutcome;
use fieldhouse_core::types::DbId;
use fieldhouse_db::models::exercise_log::UpsertExerciseLog;
use fieldhouse_db::models::workout_session::{SessionWithLogs, WorkoutSession};
use fieldhouse_db::repositories::{ExerciseLogRepo, ExerciseRepo, WorkoutSessionRepo};
use fieldhouse_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a session and check that the caller owns its assignment.
async fn load_owned(pool: &DbPool, user: &AuthUser, id: DbId) -> AppResult<WorkoutSession> {
    let session = WorkoutSessionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutSession", id)))?;
    let athlete_id = WorkoutSessionRepo::find_athlete_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutSession", id)))?;
    user.ctx.require_self_or_admin(athlete_id)?;
    Ok(session)
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = load_owned(&state.pool, &user, id).await?;
    let logs = ExerciseLogRepo::list_for_session(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: SessionWithLogs { session, logs },
    }))
}

/// POST /api/v1/sessions/{id}/complete
///
/// Completing twice is a no-op that returns the stored session with its
/// original `completed_at`.
pub async fn complete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = load_owned(&state.pool, &user, id).await?;
    let status = session.parsed_status().map_err(AppError::InternalError)?;

    let session = match status.completion() {
        CompletionOutcome::AlreadyCompleted => session,
        CompletionOutcome::Transition => {
            let completed = WorkoutSessionRepo::complete(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::not_found("WorkoutSession", id)))?;
            tracing::info!(
                user_id = user.ctx.user_id,
                session_id = id,
                assignment_id = completed.assignment_id,
                "Session completed",
            );
            completed
        }
    };

    Ok(Json(DataResponse { data: session }))
}

/// GET /api/v1/sessions/{id}/logs
pub async fn list_logs(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_owned(&state.pool, &user, id).await?;
    let logs = ExerciseLogRepo::list_for_session(&state.pool, id).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// PUT /api/v1/sessions/{id}/logs/{exercise_id}
///
/// Writes or overwrites the single log for this session and exercise.
/// Sets, reps and weight are stored as given.
pub async fn upsert_log(
    user: AuthUser,
    State(state): State<AppState>,
    Path((id, exercise_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpsertExerciseLog>,
) -> AppResult<impl IntoResponse> {
    load_owned(&state.pool, &user, id).await?;
    if ExerciseRepo::find_by_id(&state.pool, exercise_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown exercise id: {exercise_id}"
        ))));
    }

    let log = ExerciseLogRepo::upsert(&state.pool, id, exercise_id, &input).await?;

    tracing::info!(
        user_id = user.ctx.user_id,
        session_id = id,
        exercise_id,
        completed = log.completed,
        "Exercise log recorded",
    );

    Ok(Json(DataResponse { data: log }))
}
