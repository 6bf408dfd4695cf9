//! Repository for the `athlete_readiness_logs` table.

use fieldhouse_core::types::{DbId, Day};
use sqlx::PgPool;

use crate::models::readiness::{ReadinessLog, UpsertReadiness};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, athlete_id, log_date, soreness, fatigue, notes, created_at, updated_at";

/// Provides daily readiness writes and reads.
pub struct ReadinessRepo;

impl ReadinessRepo {
    /// Record an athlete's readiness for a day. A second write for the same
    /// day replaces the first (last write wins).
    pub async fn upsert(
        pool: &PgPool,
        athlete_id: DbId,
        input: &UpsertReadiness,
    ) -> Result<ReadinessLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO athlete_readiness_logs (athlete_id, log_date, soreness, fatigue, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (athlete_id, log_date) DO UPDATE \
             SET soreness = EXCLUDED.soreness, \
                 fatigue = EXCLUDED.fatigue, \
                 notes = EXCLUDED.notes, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadinessLog>(&query)
            .bind(athlete_id)
            .bind(input.log_date)
            .bind(input.soreness)
            .bind(input.fatigue)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// The most recently written row for `(athlete_id, log_date)`.
    pub async fn find_for_day(
        pool: &PgPool,
        athlete_id: DbId,
        log_date: Day,
    ) -> Result<Option<ReadinessLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM athlete_readiness_logs \
             WHERE athlete_id = $1 AND log_date = $2 \
             ORDER BY updated_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, ReadinessLog>(&query)
            .bind(athlete_id)
            .bind(log_date)
            .fetch_optional(pool)
            .await
    }

    /// Rows for an athlete within the inclusive date range.
    pub async fn list_in_range(
        pool: &PgPool,
        athlete_id: DbId,
        from: Day,
        to: Day,
    ) -> Result<Vec<ReadinessLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM athlete_readiness_logs \
             WHERE athlete_id = $1 AND log_date >= $2 AND log_date <= $3 \
             ORDER BY log_date, updated_at"
        );
        sqlx::query_as::<_, ReadinessLog>(&query)
            .bind(athlete_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
