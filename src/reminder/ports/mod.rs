//! Port contracts for reminder task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by reminder
//! services.

pub mod repository;

pub use repository::{ReminderRepositoryError, ReminderRepositoryResult, ReminderTaskRepository};
