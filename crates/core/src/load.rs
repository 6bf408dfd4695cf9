//! Acute:chronic workload ratio (ACWR).
//!
//! Load is measured as a plain session count. The acute window is the
//! trailing 7 days and the chronic figure is the trailing 28-day count
//! divided by 4. This is a flat division, not a per-week bucket average and
//! not an exponentially weighted average, and the ratio is rounded to two
//! decimals before classification.
//!
//! When the chronic figure is zero the ratio is reported as 0 regardless of
//! the acute count. An athlete with no 28-day history therefore shows as
//! `sweet_spot` even after a sudden burst of sessions; this is kept for
//! compatibility with existing dashboards.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Acute window length in days.
pub const ACUTE_WINDOW_DAYS: i64 = 7;

/// Chronic window length in days.
pub const CHRONIC_WINDOW_DAYS: i64 = 28;

/// The chronic count is divided by this many weeks.
pub const CHRONIC_WEEKS: f64 = 4.0;

/// Ratios strictly above this are `overload_risk`.
pub const OVERLOAD_THRESHOLD: f64 = 1.30;

/// Ratios strictly below this are `underload`.
pub const UNDERLOAD_THRESHOLD: f64 = 0.80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFlag {
    OverloadRisk,
    SweetSpot,
    Underload,
}

/// Result of an ACWR computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcwrReport {
    /// Sessions started in `[reference - 7d, reference]`.
    pub acute: i64,
    /// Sessions started in `[reference - 28d, reference]`, divided by 4.
    pub chronic: f64,
    pub ratio: f64,
    pub flag: LoadFlag,
    pub reference: Timestamp,
}

/// `reference` moved back by `days`, or a validation error when that
/// instant is before the earliest representable timestamp.
fn days_before(reference: Timestamp, days: i64) -> Result<Timestamp, CoreError> {
    reference
        .checked_sub_signed(Duration::days(days))
        .ok_or_else(|| {
            CoreError::Validation(format!("Reference time {reference} is out of range"))
        })
}

/// Earliest instant that still counts toward the chronic window.
pub fn chronic_window_start(reference: Timestamp) -> Result<Timestamp, CoreError> {
    days_before(reference, CHRONIC_WINDOW_DAYS)
}

/// Classify an already-rounded ratio. Both thresholds belong to the sweet spot.
pub fn classify_ratio(ratio: f64) -> LoadFlag {
    if ratio > OVERLOAD_THRESHOLD {
        LoadFlag::OverloadRisk
    } else if ratio < UNDERLOAD_THRESHOLD {
        LoadFlag::Underload
    } else {
        LoadFlag::SweetSpot
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn count_between(session_starts: &[Timestamp], from: Timestamp, to: Timestamp) -> i64 {
    session_starts
        .iter()
        .filter(|&&t| t >= from && t <= to)
        .count() as i64
}

/// Compute the ACWR for a snapshot of session start times.
///
/// Pure: the same inputs always yield the same report. Timestamps outside
/// the 28-day window (including any after `reference`) are ignored. A
/// `reference` too early for the 28-day window to exist is a validation error.
pub fn compute_acwr(
    session_starts: &[Timestamp],
    reference: Timestamp,
) -> Result<AcwrReport, CoreError> {
    let acute = count_between(
        session_starts,
        days_before(reference, ACUTE_WINDOW_DAYS)?,
        reference,
    );
    let chronic_count = count_between(session_starts, chronic_window_start(reference)?, reference);
    let chronic = chronic_count as f64 / CHRONIC_WEEKS;

    let ratio = if chronic > 0.0 {
        round_to_hundredths(acute as f64 / chronic)
    } else {
        0.0
    };

    Ok(AcwrReport {
        acute,
        chronic,
        ratio,
        flag: classify_ratio(ratio),
        reference,
    })
}
