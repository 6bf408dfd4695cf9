//! Repository for the `workout_assignments` table.

use fieldhouse_core::types::{DbId, Day};
use sqlx::PgPool;

use crate::models::assignment::{CreateAssignment, WorkoutAssignment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, athlete_id, template_id, week_start, week_end, created_at";

/// Provides create/read operations for assignments. Assignments are not
/// mutated after creation.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment. `week_end` comes from
    /// [`fieldhouse_core::week::week_end_for`]; the table's check constraint
    /// rejects any other value.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
        week_end: Day,
    ) -> Result<WorkoutAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_assignments (athlete_id, template_id, week_start, week_end) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutAssignment>(&query)
            .bind(input.athlete_id)
            .bind(input.template_id)
            .bind(input.week_start)
            .bind(week_end)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_assignments WHERE id = $1");
        sqlx::query_as::<_, WorkoutAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Assignments lying entirely inside `[range_start, range_end]`.
    ///
    /// Exact-bounds containment: `week_start >= range_start AND
    /// week_end <= range_end`. An assignment that merely overlaps the range
    /// is not returned. `athlete_id = None` lists every athlete.
    pub async fn list_in_range(
        pool: &PgPool,
        athlete_id: Option<DbId>,
        range_start: Day,
        range_end: Day,
    ) -> Result<Vec<WorkoutAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_assignments \
             WHERE ($1::BIGINT IS NULL OR athlete_id = $1) \
               AND week_start >= $2 \
               AND week_end <= $3 \
             ORDER BY week_start, athlete_id, id"
        );
        sqlx::query_as::<_, WorkoutAssignment>(&query)
            .bind(athlete_id)
            .bind(range_start)
            .bind(range_end)
            .fetch_all(pool)
            .await
    }
}
