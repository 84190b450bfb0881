//! Repository port for reminder task persistence and lookup.

use crate::reminder::domain::{EmployerId, ReminderStatus, ReminderTask, ReminderTaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for reminder repository operations.
pub type ReminderRepositoryResult<T> = Result<T, ReminderRepositoryError>;

/// Reminder task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReminderTaskRepository: Send + Sync {
    /// Stores a new reminder task.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &ReminderTask) -> ReminderRepositoryResult<()>;

    /// Persists changes to an existing reminder task.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRepositoryError::NotFound`] when the task does not
    /// exist; no row is mutated in that case.
    async fn update(&self, task: &ReminderTask) -> ReminderRepositoryResult<()>;

    /// Finds a reminder task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: ReminderTaskId)
    -> ReminderRepositoryResult<Option<ReminderTask>>;

    /// Returns all of an employer's reminder tasks in creation order.
    async fn list_by_employer(
        &self,
        employer_id: EmployerId,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>>;

    /// Returns an employer's reminder tasks with the given status, in
    /// creation order.
    ///
    /// Backed by the compound `(employer_id, status)` index.
    async fn list_by_employer_and_status(
        &self,
        employer_id: EmployerId,
        status: ReminderStatus,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>>;

    /// Returns pending reminder tasks whose due timestamp is present and at
    /// or before `cutoff`, ordered by due timestamp ascending.
    ///
    /// Backed by the `due_at` index. Done and ignored tasks are never
    /// returned.
    async fn list_due_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>>;
}

/// Errors returned by reminder repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReminderRepositoryError {
    /// A reminder task with the same identifier already exists.
    #[error("duplicate reminder task identifier: {0}")]
    DuplicateTask(ReminderTaskId),

    /// The reminder task was not found.
    #[error("reminder task not found: {0}")]
    NotFound(ReminderTaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReminderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
