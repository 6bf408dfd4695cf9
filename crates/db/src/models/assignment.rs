//! Workout assignment entity model and DTOs.
//!
//! An assignment binds a template to an athlete for one calendar week.
//! `week_end` is always derived as `week_start + 6 days`; callers never
//! supply it.

use fieldhouse_core::types::{DbId, Day, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workout_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutAssignment {
    pub id: DbId,
    pub athlete_id: DbId,
    pub template_id: DbId,
    pub week_start: Day,
    pub week_end: Day,
    pub created_at: Timestamp,
}

/// DTO for creating an assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub athlete_id: DbId,
    pub template_id: DbId,
    pub week_start: Day,
}
