//! Calendar-week bounds for workout assignments.
//!
//! An assignment always covers seven consecutive days: `week_end` is
//! `week_start + 6 days`. Week listing uses exact-bounds containment, so an
//! assignment that only partially overlaps the requested range is excluded.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Day;

/// Days added to `week_start` to obtain `week_end`.
pub const WEEK_SPAN_DAYS: i64 = 6;

/// Maximum number of days a calendar range may span.
pub const MAX_RANGE_DAYS: i64 = 366;

/// The last day of the week that begins on `week_start`.
///
/// Fails for a `week_start` so close to the end of the calendar that the
/// week cannot be represented.
pub fn week_end_for(week_start: Day) -> Result<Day, CoreError> {
    week_start
        .checked_add_signed(Duration::days(WEEK_SPAN_DAYS))
        .ok_or_else(|| {
            CoreError::Validation(format!("Week starting {week_start} is out of range"))
        })
}

/// Whether an assignment week falls entirely inside `[range_start, range_end]`.
pub fn within_range(week_start: Day, week_end: Day, range_start: Day, range_end: Day) -> bool {
    week_start >= range_start && week_end <= range_end
}

/// Reject ranges whose start is after their end.
pub fn validate_range(range_start: Day, range_end: Day) -> Result<(), CoreError> {
    if range_start > range_end {
        return Err(CoreError::Validation(format!(
            "Range start {range_start} is after range end {range_end}"
        )));
    }
    Ok(())
}

/// Expand an inclusive range into its days, capped at [`MAX_RANGE_DAYS`].
pub fn days_in_range(range_start: Day, range_end: Day) -> Result<Vec<Day>, CoreError> {
    validate_range(range_start, range_end)?;
    let span = (range_end - range_start).num_days() + 1;
    if span > MAX_RANGE_DAYS {
        return Err(CoreError::Validation(format!(
            "Range spans {span} days; at most {MAX_RANGE_DAYS} are allowed"
        )));
    }
    Ok(range_start.iter_days().take(span as usize).collect())
}
