//! Weekly progress and acute:chronic workload ratio per athlete.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use fieldhouse_core::load::{chronic_window_start, compute_acwr};
use fieldhouse_core::progress::summarize;
use fieldhouse_core::session::SessionStatus;
use fieldhouse_core::types::DbId;
use fieldhouse_core::week::validate_range;
use fieldhouse_db::repositories::{AssignmentRepo, ExerciseLogRepo, WorkoutSessionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{AcwrParams, WeekRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/athletes/{id}/progress?week_start=&week_end=
///
/// Counts assignments inside the week, their completed sessions, and the
/// exercise logs recorded on those sessions.
pub async fn progress(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Query(params): Query<WeekRangeParams>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;
    validate_range(params.week_start, params.week_end)?;

    let assignments = AssignmentRepo::list_in_range(
        &state.pool,
        Some(athlete_id),
        params.week_start,
        params.week_end,
    )
    .await?;
    let assignment_ids: Vec<DbId> = assignments.iter().map(|a| a.id).collect();

    let sessions = WorkoutSessionRepo::list_for_assignments(&state.pool, &assignment_ids).await?;
    let statuses = sessions
        .iter()
        .map(|s| s.parsed_status())
        .collect::<Result<Vec<SessionStatus>, String>>()
        .map_err(AppError::InternalError)?;
    let session_ids: Vec<DbId> = sessions.iter().map(|s| s.id).collect();

    let flags = ExerciseLogRepo::completion_flags(&state.pool, &session_ids).await?;

    Ok(Json(DataResponse {
        data: summarize(assignments.len(), &statuses, &flags),
    }))
}

/// GET /api/v1/athletes/{id}/acwr?at=
///
/// Uses every session started in the 28 days up to `at` (default: now),
/// whatever its status.
pub async fn acwr(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Query(params): Query<AcwrParams>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;
    let reference = params.at.unwrap_or_else(Utc::now);
    let window_start = chronic_window_start(reference)?;

    let starts =
        WorkoutSessionRepo::list_start_times(&state.pool, athlete_id, window_start, reference)
            .await?;
    let report = compute_acwr(&starts, reference)?;

    tracing::debug!(
        athlete_id,
        acute = report.acute,
        chronic = report.chronic,
        ratio = report.ratio,
        "ACWR computed",
    );

    Ok(Json(DataResponse { data: report }))
}
