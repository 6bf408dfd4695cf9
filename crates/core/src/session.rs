//! Workout session status machine.
//!
//! ```text
//! absent --ensure--> in_progress --complete--> completed
//! ```
//!
//! A session is created lazily the first time an athlete opens an
//! assignment. Completion is an explicit caller action; it is never
//! derived from how many exercise logs are marked completed.

use serde::{Deserialize, Serialize};

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid session status strings.
pub const VALID_SESSION_STATUSES: &[&str] = &[STATUS_IN_PROGRESS, STATUS_COMPLETED];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// What a completion request does to a session in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// `in_progress -> completed`; `completed_at` is stamped.
    Transition,
    /// Already completed; the stored row is returned untouched.
    AlreadyCompleted,
}

impl SessionStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid session status '{s}'. Must be one of: {}",
                VALID_SESSION_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Status of a freshly created session.
    pub fn initial() -> Self {
        Self::InProgress
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }

    pub fn completion(&self) -> CompletionOutcome {
        match self {
            Self::InProgress => CompletionOutcome::Transition,
            Self::Completed => CompletionOutcome::AlreadyCompleted,
        }
    }
}
