//! Exercise log entity model and DTOs.
//!
//! sets/reps/weight are stored exactly as reported. Zero and negative
//! values are accepted.

use fieldhouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `exercise_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseLog {
    pub id: DbId,
    pub session_id: DbId,
    pub exercise_id: DbId,
    pub completed: bool,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub logged_at: Timestamp,
}

/// DTO for writing the log of one exercise within a session.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertExerciseLog {
    pub completed: bool,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
}
