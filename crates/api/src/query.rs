//! Shared query parameter types for API handlers.

use fieldhouse_core::types::{DbId, Day, Timestamp};
use serde::Deserialize;

/// `?week_start=&week_end=` for week-scoped views.
#[derive(Debug, Deserialize)]
pub struct WeekRangeParams {
    pub week_start: Day,
    pub week_end: Day,
}

/// `?athlete_id=&week_start=&week_end=` for assignment listing. Omitting
/// `athlete_id` lists every athlete (admin calendar).
#[derive(Debug, Deserialize)]
pub struct AssignmentListParams {
    pub athlete_id: Option<DbId>,
    pub week_start: Day,
    pub week_end: Day,
}

/// `?from=&to=`, both inclusive.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Day,
    pub to: Day,
}

/// `?date=` for single-day lookups.
#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: Day,
}

/// `?at=` reference instant for load analytics; defaults to now.
#[derive(Debug, Deserialize)]
pub struct AcwrParams {
    pub at: Option<Timestamp>,
}
