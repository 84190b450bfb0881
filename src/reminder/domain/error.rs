//! Error types for reminder domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain reminder values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReminderDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the persisted column bound.
    #[error("task title length {0} exceeds 255 characters")]
    TaskTitleTooLong(usize),

    /// The redirect URL is empty after trimming.
    #[error("redirect URL must not be empty")]
    EmptyRedirectUrl,

    /// The redirect URL exceeds the persisted column bound.
    #[error("redirect URL length {0} exceeds 1024 characters")]
    RedirectUrlTooLong(usize),

    /// The status value is not one of the recognized states.
    #[error(transparent)]
    InvalidStatus(#[from] ParseReminderStatusError),

    /// The task type value is not one of the recognized categories.
    #[error(transparent)]
    InvalidTaskType(#[from] ParseReminderTaskTypeError),
}

/// Error returned while parsing reminder statuses from raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reminder status: {0}")]
pub struct ParseReminderStatusError(pub String);

/// Error returned while parsing reminder task types from raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown reminder task type: {0}")]
pub struct ParseReminderTaskTypeError(pub String);
