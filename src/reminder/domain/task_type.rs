//! Reminder task categories.

use super::ParseReminderTaskTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the follow-up work a reminder points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderTaskType {
    /// Respond to or send a message.
    Message,
    /// Act on a candidate.
    Candidate,
    /// Update a job posting.
    JobUpdate,
    /// Prepare for or follow up on an interview.
    Interview,
    /// Anything that fits no other category.
    Other,
}

impl ReminderTaskType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Candidate => "candidate",
            Self::JobUpdate => "job_update",
            Self::Interview => "interview",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ReminderTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReminderTaskType {
    type Error = ParseReminderTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "message" => Ok(Self::Message),
            "candidate" => Ok(Self::Candidate),
            "job_update" => Ok(Self::JobUpdate),
            "interview" => Ok(Self::Interview),
            "other" => Ok(Self::Other),
            _ => Err(ParseReminderTaskTypeError(value.to_owned())),
        }
    }
}
