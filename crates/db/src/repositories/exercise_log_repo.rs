//! Repository for the `exercise_logs` table.

use fieldhouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::exercise_log::{ExerciseLog, UpsertExerciseLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, exercise_id, completed, sets, reps, weight, logged_at";

/// Provides keyed writes and reads of per-exercise logs.
pub struct ExerciseLogRepo;

impl ExerciseLogRepo {
    /// Write the log for `(session_id, exercise_id)`, overwriting any earlier
    /// values and stamping `logged_at = NOW()`.
    ///
    /// Uses `ON CONFLICT (session_id, exercise_id) DO UPDATE` to guarantee
    /// one row per pair.
    pub async fn upsert(
        pool: &PgPool,
        session_id: DbId,
        exercise_id: DbId,
        input: &UpsertExerciseLog,
    ) -> Result<ExerciseLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercise_logs \
                (session_id, exercise_id, completed, sets, reps, weight, logged_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW()) \
             ON CONFLICT (session_id, exercise_id) DO UPDATE \
             SET completed = EXCLUDED.completed, \
                 sets = EXCLUDED.sets, \
                 reps = EXCLUDED.reps, \
                 weight = EXCLUDED.weight, \
                 logged_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseLog>(&query)
            .bind(session_id)
            .bind(exercise_id)
            .bind(input.completed)
            .bind(input.sets)
            .bind(input.reps)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    /// Every log of a session, ordered by exercise.
    pub async fn list_for_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<ExerciseLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exercise_logs WHERE session_id = $1 ORDER BY exercise_id"
        );
        sqlx::query_as::<_, ExerciseLog>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// The `completed` flag of every log attached to any of `session_ids`.
    pub async fn completion_flags(
        pool: &PgPool,
        session_ids: &[DbId],
    ) -> Result<Vec<bool>, sqlx::Error> {
        sqlx::query_scalar("SELECT completed FROM exercise_logs WHERE session_id = ANY($1)")
            .bind(session_ids)
            .fetch_all(pool)
            .await
    }
}
