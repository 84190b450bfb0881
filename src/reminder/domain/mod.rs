//! Domain model for reminder task storage.
//!
//! The reminder domain models employer-owned follow-up tasks with optional
//! job and candidate references, bounded text fields, and a flat completion
//! status, keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod status;
mod task;
mod task_type;

pub use error::{ParseReminderStatusError, ParseReminderTaskTypeError, ReminderDomainError};
pub use ids::{CandidateId, EmployerId, JobId, RedirectUrl, ReminderTaskId, TaskTitle};
pub use status::ReminderStatus;
pub use task::{PersistedReminderTaskData, ReminderTask};
pub use task_type::ReminderTaskType;
