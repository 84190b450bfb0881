//! Reminder completion status.

use super::ParseReminderStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a reminder task.
///
/// The set is flat: no transition graph is enforced, so any status may
/// follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    /// The reminder still requires action.
    Pending,
    /// The reminder has been completed.
    Done,
    /// The reminder has been dismissed without action.
    Ignored,
}

impl ReminderStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReminderStatus {
    type Error = ParseReminderStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            "ignored" => Ok(Self::Ignored),
            _ => Err(ParseReminderStatusError(value.to_owned())),
        }
    }
}
