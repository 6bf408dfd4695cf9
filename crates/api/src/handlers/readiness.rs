//! Handlers for athlete readiness self-reports and calendar colors.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use fieldhouse_core::readiness::{calendar_colors, color_for_day, DayColor, ReadinessEntry};
use fieldhouse_core::types::DbId;
use fieldhouse_core::validation::validate_input;
use fieldhouse_core::week::{days_in_range, validate_range};
use fieldhouse_db::models::readiness::{ReadinessLog, UpsertReadiness};
use fieldhouse_db::repositories::ReadinessRepo;

use super::ensure_athlete;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{DateRangeParams, DayParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/athletes/{id}/readiness
///
/// A second report for the same day replaces the first. The target must be
/// an existing athlete account.
pub async fn upsert(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Json(input): Json<UpsertReadiness>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;
    validate_input(&input)?;
    ensure_athlete(&state.pool, athlete_id).await?;

    let log = ReadinessRepo::upsert(&state.pool, athlete_id, &input).await?;

    tracing::info!(
        user_id = user.ctx.user_id,
        athlete_id,
        log_date = %log.log_date,
        soreness = log.soreness,
        fatigue = log.fatigue,
        "Readiness recorded",
    );

    Ok(Json(DataResponse { data: log }))
}

/// GET /api/v1/athletes/{id}/readiness?from=&to=
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;
    validate_range(params.from, params.to)?;

    let logs = ReadinessRepo::list_in_range(&state.pool, athlete_id, params.from, params.to).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// GET /api/v1/athletes/{id}/readiness/color?date=
pub async fn color(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Query(params): Query<DayParams>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;

    let entries: Vec<ReadinessEntry> =
        ReadinessRepo::find_for_day(&state.pool, athlete_id, params.date)
            .await?
            .iter()
            .map(ReadinessLog::to_entry)
            .collect();

    Ok(Json(DataResponse {
        data: DayColor {
            date: params.date,
            color: color_for_day(&entries, params.date),
        },
    }))
}

/// GET /api/v1/athletes/{id}/calendar?from=&to=
///
/// One entry per day of the inclusive range; days without a report are `none`.
pub async fn calendar(
    user: AuthUser,
    State(state): State<AppState>,
    Path(athlete_id): Path<DbId>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    user.ctx.require_self_or_admin(athlete_id)?;
    let days = days_in_range(params.from, params.to)?;

    let logs = ReadinessRepo::list_in_range(&state.pool, athlete_id, params.from, params.to).await?;
    let entries: Vec<ReadinessEntry> = logs.iter().map(ReadinessLog::to_entry).collect();

    Ok(Json(DataResponse {
        data: calendar_colors(&entries, &days),
    }))
}
