//! Exercise catalog entity model and DTOs.

use fieldhouse_core::types::{DbId, Timestamp};
use fieldhouse_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseDefinition {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exercise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExercise {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: String,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub category: String,
    pub description: Option<String>,
}

/// DTO for updating an exercise. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExercise {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub category: Option<String>,
    pub description: Option<String>,
}
