//! Repository for the `workout_sessions` table.

use fieldhouse_core::session::{SessionStatus, STATUS_COMPLETED};
use fieldhouse_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::workout_session::WorkoutSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, assignment_id, status, started_at, completed_at";

/// Provides session lifecycle operations.
pub struct WorkoutSessionRepo;

impl WorkoutSessionRepo {
    /// Return the session for `assignment_id`, creating it if absent.
    ///
    /// A single statement keyed on `uq_workout_sessions_assignment`: the
    /// no-op `DO UPDATE` makes `RETURNING` yield the existing row on
    /// conflict, so concurrent callers all receive the same session.
    pub async fn ensure(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<WorkoutSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_sessions (assignment_id, status, started_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (assignment_id) DO UPDATE \
                SET assignment_id = workout_sessions.assignment_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(assignment_id)
            .bind(SessionStatus::initial().as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a session by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_sessions WHERE id = $1");
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the session of an assignment, if one was started.
    pub async fn find_by_assignment(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_sessions WHERE assignment_id = $1");
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(assignment_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a session completed. An existing `completed_at` is kept.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_sessions SET \
                status = $2, \
                completed_at = COALESCE(completed_at, NOW()) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(id)
            .bind(STATUS_COMPLETED)
            .fetch_optional(pool)
            .await
    }

    /// The athlete who owns a session through its assignment.
    pub async fn find_athlete_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT a.athlete_id \
             FROM workout_sessions s \
             JOIN workout_assignments a ON a.id = s.assignment_id \
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Sessions belonging to any of `assignment_ids`.
    pub async fn list_for_assignments(
        pool: &PgPool,
        assignment_ids: &[DbId],
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_sessions \
             WHERE assignment_id = ANY($1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(assignment_ids)
            .fetch_all(pool)
            .await
    }

    /// Start times of an athlete's sessions within `[from, to]`, any status.
    pub async fn list_start_times(
        pool: &PgPool,
        athlete_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT s.started_at \
             FROM workout_sessions s \
             JOIN workout_assignments a ON a.id = s.assignment_id \
             WHERE a.athlete_id = $1 \
               AND s.started_at >= $2 \
               AND s.started_at <= $3 \
             ORDER BY s.started_at",
        )
        .bind(athlete_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }
}
