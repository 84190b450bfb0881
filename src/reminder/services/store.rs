//! Service layer for reminder task creation, lookup, and mutation.

use crate::reminder::{
    domain::{
        CandidateId, EmployerId, JobId, RedirectUrl, ReminderDomainError, ReminderStatus,
        ReminderTask, ReminderTaskId, ReminderTaskType, TaskTitle,
    },
    ports::{ReminderRepositoryError, ReminderTaskRepository},
};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a reminder task.
///
/// `task_type` is accepted as a raw string and validated against the
/// recognized categories when the request is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReminderRequest {
    employer_id: EmployerId,
    task_title: String,
    task_type: String,
    redirect_url: String,
    job_id: Option<JobId>,
    candidate_id: Option<CandidateId>,
    due_at: Option<DateTime<Utc>>,
}

impl CreateReminderRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        employer_id: EmployerId,
        task_title: impl Into<String>,
        task_type: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            employer_id,
            task_title: task_title.into(),
            task_type: task_type.into(),
            redirect_url: redirect_url.into(),
            job_id: None,
            candidate_id: None,
            due_at: None,
        }
    }

    /// Attaches a job posting reference.
    #[must_use]
    pub const fn with_job(mut self, job_id: JobId) -> Self {
        self.job_id = Some(job_id);
        self
    }

    /// Attaches a candidate reference.
    #[must_use]
    pub const fn with_candidate(mut self, candidate_id: CandidateId) -> Self {
        self.candidate_id = Some(candidate_id);
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }
}

/// Request payload for setting a reminder task's status.
///
/// The status is accepted as a raw string and validated when the request is
/// executed; any recognized status may replace any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    id: ReminderTaskId,
    status: String,
}

impl UpdateStatusRequest {
    /// Creates a status update request.
    #[must_use]
    pub fn new(id: ReminderTaskId, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

/// Request payload for moving a reminder task's due timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescheduleRequest {
    id: ReminderTaskId,
    due_at: DateTime<Utc>,
}

impl RescheduleRequest {
    /// Creates a reschedule request.
    #[must_use]
    pub const fn new(id: ReminderTaskId, due_at: DateTime<Utc>) -> Self {
        Self { id, due_at }
    }
}

/// Employer-scoped partial update of a reminder task.
///
/// Only the fields explicitly set on the request are touched; the optional
/// associations and the due timestamp can also be cleared. The request is
/// rejected when the task does not belong to the given employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReminderRequest {
    employer_id: EmployerId,
    id: ReminderTaskId,
    task_title: Option<String>,
    task_type: Option<String>,
    redirect_url: Option<String>,
    status: Option<String>,
    due_at: Option<Option<DateTime<Utc>>>,
    job_id: Option<Option<JobId>>,
    candidate_id: Option<Option<CandidateId>>,
}

impl UpdateReminderRequest {
    /// Creates an empty patch for the given employer and task.
    #[must_use]
    pub const fn new(employer_id: EmployerId, id: ReminderTaskId) -> Self {
        Self {
            employer_id,
            id,
            task_title: None,
            task_type: None,
            redirect_url: None,
            status: None,
            due_at: None,
            job_id: None,
            candidate_id: None,
        }
    }

    /// Replaces the task title.
    #[must_use]
    pub fn with_title(mut self, task_title: impl Into<String>) -> Self {
        self.task_title = Some(task_title.into());
        self
    }

    /// Replaces the task category.
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Replaces the redirect URL.
    #[must_use]
    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(Some(due_at));
        self
    }

    /// Clears the due timestamp.
    #[must_use]
    pub const fn clearing_due_at(mut self) -> Self {
        self.due_at = Some(None);
        self
    }

    /// Sets the job posting reference.
    #[must_use]
    pub const fn with_job(mut self, job_id: JobId) -> Self {
        self.job_id = Some(Some(job_id));
        self
    }

    /// Clears the job posting reference.
    #[must_use]
    pub const fn clearing_job(mut self) -> Self {
        self.job_id = Some(None);
        self
    }

    /// Sets the candidate reference.
    #[must_use]
    pub const fn with_candidate(mut self, candidate_id: CandidateId) -> Self {
        self.candidate_id = Some(Some(candidate_id));
        self
    }

    /// Clears the candidate reference.
    #[must_use]
    pub const fn clearing_candidate(mut self) -> Self {
        self.candidate_id = Some(None);
        self
    }
}

/// Service-level errors for reminder task operations.
#[derive(Debug, Error)]
pub enum ReminderServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ReminderDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ReminderRepositoryError),

    /// The task exists but belongs to a different employer.
    #[error("reminder task {id} does not belong to employer {employer_id}")]
    NotOwned {
        /// The task that was targeted.
        id: ReminderTaskId,
        /// The employer that attempted the mutation.
        employer_id: EmployerId,
    },
}

/// Result type for reminder service operations.
pub type ReminderServiceResult<T> = Result<T, ReminderServiceError>;

/// Reminder task store orchestration service.
#[derive(Clone)]
pub struct ReminderTaskService<R, C>
where
    R: ReminderTaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ReminderTaskService<R, C>
where
    R: ReminderTaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new reminder task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending reminder task.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Domain`] when a field is missing,
    /// oversized, or not a recognized category, and
    /// [`ReminderServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateReminderRequest,
    ) -> ReminderServiceResult<ReminderTask> {
        let title = TaskTitle::new(request.task_title)?;
        let task_type = ReminderTaskType::try_from(request.task_type.as_str())
            .map_err(ReminderDomainError::from)?;
        let redirect_url = RedirectUrl::new(request.redirect_url)?;

        let mut task = ReminderTask::new(
            request.employer_id,
            title,
            task_type,
            redirect_url,
            &*self.clock,
        );
        if let Some(job_id) = request.job_id {
            task = task.with_job(job_id);
        }
        if let Some(candidate_id) = request.candidate_id {
            task = task.with_candidate(candidate_id);
        }
        if let Some(due_at) = request.due_at {
            task = task.with_due_at(due_at);
        }

        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Retrieves a reminder task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRepositoryError::NotFound`] (wrapped) when no task
    /// has the given identifier.
    pub async fn get(&self, id: ReminderTaskId) -> ReminderServiceResult<ReminderTask> {
        let task = self.repository.find_by_id(id).await?;
        task.ok_or_else(|| ReminderRepositoryError::NotFound(id).into())
    }

    /// Lists all of an employer's reminder tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn list_by_employer(
        &self,
        employer_id: EmployerId,
    ) -> ReminderServiceResult<Vec<ReminderTask>> {
        Ok(self.repository.list_by_employer(employer_id).await?)
    }

    /// Lists an employer's reminder tasks with the given status, in creation
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn list_by_employer_and_status(
        &self,
        employer_id: EmployerId,
        status: ReminderStatus,
    ) -> ReminderServiceResult<Vec<ReminderTask>> {
        Ok(self
            .repository
            .list_by_employer_and_status(employer_id, status)
            .await?)
    }

    /// Lists pending reminder tasks due at or before `cutoff`, ordered by
    /// due timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn list_due_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> ReminderServiceResult<Vec<ReminderTask>> {
        Ok(self.repository.list_due_before(cutoff).await?)
    }

    /// Lists pending reminder tasks falling due within `window` from now.
    ///
    /// Intended for sweep-style callers that look ahead by a configured
    /// deadline window.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Repository`] when the lookup fails.
    pub async fn list_due_within(
        &self,
        window: Duration,
    ) -> ReminderServiceResult<Vec<ReminderTask>> {
        let cutoff = self.clock.utc() + window;
        let due = self.repository.list_due_before(cutoff).await?;
        log::info!(
            "checked pending reminders nearing deadline: count={} window_minutes={}",
            due.len(),
            window.num_minutes()
        );
        Ok(due)
    }

    /// Sets a reminder task's status and refreshes its mutation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::Domain`] when the status string is
    /// unrecognized (nothing is mutated), and a wrapped
    /// [`ReminderRepositoryError::NotFound`] when the task does not exist.
    pub async fn update_status(
        &self,
        request: UpdateStatusRequest,
    ) -> ReminderServiceResult<ReminderTask> {
        let status = ReminderStatus::try_from(request.status.as_str())
            .map_err(ReminderDomainError::from)?;

        let mut task = self.get(request.id).await?;
        task.mark_status(status, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a reminder task's due timestamp and refreshes its mutation
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`ReminderRepositoryError::NotFound`] when the task
    /// does not exist.
    pub async fn reschedule(
        &self,
        request: RescheduleRequest,
    ) -> ReminderServiceResult<ReminderTask> {
        let mut task = self.get(request.id).await?;
        task.reschedule(request.due_at, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Applies an employer-scoped partial update to a reminder task.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError::NotOwned`] when the task belongs to a
    /// different employer, [`ReminderServiceError::Domain`] when a patched
    /// field fails validation, and a wrapped
    /// [`ReminderRepositoryError::NotFound`] when the task does not exist.
    pub async fn update_reminder(
        &self,
        request: UpdateReminderRequest,
    ) -> ReminderServiceResult<ReminderTask> {
        let mut task = self.get(request.id).await?;
        if task.employer_id() != request.employer_id {
            return Err(ReminderServiceError::NotOwned {
                id: request.id,
                employer_id: request.employer_id,
            });
        }

        let clock = &*self.clock;
        if let Some(task_title) = request.task_title {
            task.rename(TaskTitle::new(task_title)?, clock);
        }
        if let Some(task_type) = request.task_type {
            let parsed = ReminderTaskType::try_from(task_type.as_str())
                .map_err(ReminderDomainError::from)?;
            task.recategorize(parsed, clock);
        }
        if let Some(redirect_url) = request.redirect_url {
            task.redirect_to(RedirectUrl::new(redirect_url)?, clock);
        }
        if let Some(status) = request.status {
            let parsed =
                ReminderStatus::try_from(status.as_str()).map_err(ReminderDomainError::from)?;
            task.mark_status(parsed, clock);
            if matches!(parsed, ReminderStatus::Done | ReminderStatus::Ignored) {
                log::debug!("reminder {} moved to terminal status {parsed}", task.id());
            }
        }
        if let Some(due_at) = request.due_at {
            task.set_due_at(due_at, clock);
        }
        if let Some(job_id) = request.job_id {
            task.link_job(job_id, clock);
        }
        if let Some(candidate_id) = request.candidate_id {
            task.link_candidate(candidate_id, clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }
}
