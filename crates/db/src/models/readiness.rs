//! Athlete readiness log entity model and DTOs.

use fieldhouse_core::readiness::{ReadinessEntry, MAX_SCORE, MIN_SCORE};
use fieldhouse_core::types::{DbId, Day, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `athlete_readiness_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadinessLog {
    pub id: DbId,
    pub athlete_id: DbId,
    pub log_date: Day,
    pub soreness: i32,
    pub fatigue: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ReadinessLog {
    pub fn to_entry(&self) -> ReadinessEntry {
        ReadinessEntry {
            log_date: self.log_date,
            soreness: self.soreness,
            fatigue: self.fatigue,
            written_at: self.updated_at,
        }
    }
}

/// DTO for an athlete's daily self-report.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertReadiness {
    pub log_date: Day,
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub soreness: i32,
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub fatigue: i32,
    pub notes: Option<String>,
}
