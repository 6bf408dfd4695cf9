//! Workout template entity models and DTOs.
//!
//! A template owns an ordered list of prescribed exercises. Each prescribed
//! exercise points into the exercise catalog by id; the catalog entry is
//! not owned by the template.

use fieldhouse_core::types::{DbId, Timestamp};
use fieldhouse_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `workout_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutTemplate {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `template_exercises`, joined with the catalog exercise name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateExercise {
    pub id: DbId,
    pub template_id: DbId,
    pub exercise_id: DbId,
    pub exercise_name: String,
    pub position: i32,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// A template enriched with its exercises in position order.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateWithExercises {
    #[serde(flatten)]
    pub template: WorkoutTemplate,
    pub exercises: Vec<TemplateExercise>,
}

/// One prescribed exercise supplied when creating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct PrescribedExercise {
    pub exercise_id: DbId,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for creating a template. Exercises take positions in list order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTemplate {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub category: String,
    #[serde(default)]
    pub exercises: Vec<PrescribedExercise>,
}

/// DTO for appending (or inserting at `position`) a prescribed exercise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddTemplateExercise {
    pub exercise_id: DbId,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    /// Defaults to one past the current highest position.
    #[validate(range(min = 0))]
    pub position: Option<i32>,
}

/// DTO for updating template metadata. The exercise list is edited separately.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTemplate {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub category: Option<String>,
}
