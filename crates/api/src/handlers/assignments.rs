//! Handlers for the `/assignments` resource and session start.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use fieldhouse_core::error::CoreError;
use fieldhouse_core::types::DbId;
use fieldhouse_core::week::{validate_range, week_end_for};
use fieldhouse_db::models::assignment::{CreateAssignment, WorkoutAssignment};
use fieldhouse_db::repositories::{AssignmentRepo, TemplateRepo, WorkoutSessionRepo};
use fieldhouse_db::DbPool;

use super::ensure_athlete;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::AssignmentListParams;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// Load an assignment and check that the caller owns it or is an admin.
pub(crate) async fn load_owned(
    pool: &DbPool,
    user: &AuthUser,
    id: DbId,
) -> AppResult<WorkoutAssignment> {
    let assignment = AssignmentRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutAssignment", id)))?;
    user.ctx.require_self_or_admin(assignment.athlete_id)?;
    Ok(assignment)
}

/// POST /api/v1/assignments
///
/// `week_end` is derived as `week_start + 6 days`.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<impl IntoResponse> {
    let week_end = week_end_for(input.week_start)?;
    ensure_athlete(&state.pool, input.athlete_id).await?;
    if TemplateRepo::find_by_id(&state.pool, input.template_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown template id: {}",
            input.template_id
        ))));
    }

    let assignment = AssignmentRepo::create(&state.pool, &input, week_end).await?;

    tracing::info!(
        user_id = admin.ctx.user_id,
        assignment_id = assignment.id,
        athlete_id = assignment.athlete_id,
        template_id = assignment.template_id,
        week_start = %assignment.week_start,
        "Workout assigned",
    );

    Ok(created(assignment))
}

/// GET /api/v1/assignments?athlete_id=&week_start=&week_end=
///
/// Only assignments lying entirely inside the range are returned. Omitting
/// `athlete_id` lists every athlete and is admin-only.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AssignmentListParams>,
) -> AppResult<impl IntoResponse> {
    match params.athlete_id {
        Some(athlete_id) => user.ctx.require_self_or_admin(athlete_id)?,
        None => user.ctx.require_admin()?,
    }
    validate_range(params.week_start, params.week_end)?;

    let assignments = AssignmentRepo::list_in_range(
        &state.pool,
        params.athlete_id,
        params.week_start,
        params.week_end,
    )
    .await?;
    Ok(Json(DataResponse { data: assignments }))
}

/// GET /api/v1/assignments/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = load_owned(&state.pool, &user, id).await?;
    Ok(Json(DataResponse { data: assignment }))
}

/// POST /api/v1/assignments/{id}/session
///
/// Start the assignment's session, or return it if already started.
/// Repeated and concurrent calls yield the same session.
pub async fn ensure_session(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = load_owned(&state.pool, &user, id).await?;
    let session = WorkoutSessionRepo::ensure(&state.pool, assignment.id).await?;

    tracing::info!(
        user_id = user.ctx.user_id,
        assignment_id = assignment.id,
        session_id = session.id,
        status = %session.status,
        "Session ensured",
    );

    Ok(Json(DataResponse { data: session }))
}
