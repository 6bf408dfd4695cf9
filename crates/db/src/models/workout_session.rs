//! Workout session entity model.

use fieldhouse_core::session::SessionStatus;
use fieldhouse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::exercise_log::ExerciseLog;

/// A row from the `workout_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutSession {
    pub id: DbId,
    pub assignment_id: DbId,
    pub status: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl WorkoutSession {
    /// Parsed status. The table's check constraint keeps the column valid.
    pub fn parsed_status(&self) -> Result<SessionStatus, String> {
        SessionStatus::from_str_value(&self.status)
    }
}

/// A session together with every exercise log recorded against it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionWithLogs {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub logs: Vec<ExerciseLog>,
}
