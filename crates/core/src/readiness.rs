//! Athlete readiness risk coloring.
//!
//! Athletes self-report soreness and fatigue once per day on a 1-5 scale.
//! The calendar shows each day as one of four colors, independently of the
//! ACWR load ratio. Thresholds are exact: a score of exactly 3 means
//! caution, while 4 or 5 means high risk. Evaluation runs against rows
//! pre-loaded by the caller.

use serde::{Deserialize, Serialize};

use crate::types::{Day, Timestamp};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

/// Scores at or above this trigger [`RiskColor::HighRisk`].
pub const HIGH_RISK_THRESHOLD: i32 = 4;

/// A score equal to this triggers [`RiskColor::Caution`].
pub const CAUTION_SCORE: i32 = 3;

/// Calendar color for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskColor {
    /// No readiness row for the day.
    None,
    Normal,
    Caution,
    HighRisk,
}

/// The fields of a readiness row needed for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessEntry {
    pub log_date: Day,
    pub soreness: i32,
    pub fatigue: i32,
    pub written_at: Timestamp,
}

/// One colored calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayColor {
    pub date: Day,
    pub color: RiskColor,
}

/// Color for a known pair of scores.
pub fn color_for_scores(soreness: i32, fatigue: i32) -> RiskColor {
    if soreness >= HIGH_RISK_THRESHOLD || fatigue >= HIGH_RISK_THRESHOLD {
        RiskColor::HighRisk
    } else if soreness == CAUTION_SCORE || fatigue == CAUTION_SCORE {
        RiskColor::Caution
    } else {
        RiskColor::Normal
    }
}

/// The most recently written entry for `date`, if any.
pub fn latest_for_day(entries: &[ReadinessEntry], date: Day) -> Option<&ReadinessEntry> {
    entries
        .iter()
        .filter(|e| e.log_date == date)
        .max_by_key(|e| e.written_at)
}

/// Color for `date` given every entry the caller loaded for the athlete.
pub fn color_for_day(entries: &[ReadinessEntry], date: Day) -> RiskColor {
    latest_for_day(entries, date)
        .map(|e| color_for_scores(e.soreness, e.fatigue))
        .unwrap_or(RiskColor::None)
}

/// Color every day in `days`.
pub fn calendar_colors(entries: &[ReadinessEntry], days: &[Day]) -> Vec<DayColor> {
    days.iter()
        .map(|&date| DayColor {
            date,
            color: color_for_day(entries, date),
        })
        .collect()
}
