//! Weekly progress summary for the athlete dashboard.
//!
//! All four figures are plain counts, so a week with no assignments yields
//! zeros rather than a division error.

use serde::Serialize;

use crate::session::SessionStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub workouts_completed: i64,
    pub workouts_total: i64,
    pub exercises_completed: i64,
    pub exercises_total: i64,
}

/// Summarize a week.
///
/// - `assignment_count`: assignments in the week.
/// - `session_statuses`: the sessions that exist for those assignments.
/// - `log_completion`: the `completed` flag of every exercise log attached
///   to those sessions.
pub fn summarize(
    assignment_count: usize,
    session_statuses: &[SessionStatus],
    log_completion: &[bool],
) -> ProgressSummary {
    ProgressSummary {
        workouts_completed: session_statuses.iter().filter(|s| s.is_completed()).count() as i64,
        workouts_total: assignment_count as i64,
        exercises_completed: log_completion.iter().filter(|&&done| done).count() as i64,
        exercises_total: log_completion.len() as i64,
    }
}
