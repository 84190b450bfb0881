//! Reminder task aggregate root.

use super::{
    CandidateId, EmployerId, JobId, RedirectUrl, ReminderStatus, ReminderTaskId, ReminderTaskType,
    TaskTitle,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One unit of follow-up work owned by an employer.
///
/// A task may reference a job posting, a candidate, neither, or both; the
/// references are independent and never owning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTask {
    id: ReminderTaskId,
    employer_id: EmployerId,
    job_id: Option<JobId>,
    candidate_id: Option<CandidateId>,
    title: TaskTitle,
    task_type: ReminderTaskType,
    redirect_url: RedirectUrl,
    due_at: Option<DateTime<Utc>>,
    status: ReminderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted reminder task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReminderTaskData {
    /// Persisted task identifier.
    pub id: ReminderTaskId,
    /// Persisted owning employer.
    pub employer_id: EmployerId,
    /// Persisted job reference, if any.
    pub job_id: Option<JobId>,
    /// Persisted candidate reference, if any.
    pub candidate_id: Option<CandidateId>,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted category.
    pub task_type: ReminderTaskType,
    /// Persisted redirect URL.
    pub redirect_url: RedirectUrl,
    /// Persisted due timestamp, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted completion status.
    pub status: ReminderStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ReminderTask {
    /// Creates a new pending reminder task for an employer.
    ///
    /// The identifier is generated, and `created_at` equals `updated_at`.
    #[must_use]
    pub fn new(
        employer_id: EmployerId,
        title: TaskTitle,
        task_type: ReminderTaskType,
        redirect_url: RedirectUrl,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ReminderTaskId::new(),
            employer_id,
            job_id: None,
            candidate_id: None,
            title,
            task_type,
            redirect_url,
            due_at: None,
            status: ReminderStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Attaches a job reference at construction time.
    #[must_use]
    pub const fn with_job(mut self, job_id: JobId) -> Self {
        self.job_id = Some(job_id);
        self
    }

    /// Attaches a candidate reference at construction time.
    #[must_use]
    pub const fn with_candidate(mut self, candidate_id: CandidateId) -> Self {
        self.candidate_id = Some(candidate_id);
        self
    }

    /// Sets the due timestamp at construction time.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Reconstructs a reminder task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReminderTaskData) -> Self {
        Self {
            id: data.id,
            employer_id: data.employer_id,
            job_id: data.job_id,
            candidate_id: data.candidate_id,
            title: data.title,
            task_type: data.task_type,
            redirect_url: data.redirect_url,
            due_at: data.due_at,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> ReminderTaskId {
        self.id
    }

    /// Returns the owning employer.
    #[must_use]
    pub const fn employer_id(&self) -> EmployerId {
        self.employer_id
    }

    /// Returns the job reference, if any.
    #[must_use]
    pub const fn job_id(&self) -> Option<JobId> {
        self.job_id
    }

    /// Returns the candidate reference, if any.
    #[must_use]
    pub const fn candidate_id(&self) -> Option<CandidateId> {
        self.candidate_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task category.
    #[must_use]
    pub const fn task_type(&self) -> ReminderTaskType {
        self.task_type
    }

    /// Returns the redirect URL.
    #[must_use]
    pub const fn redirect_url(&self) -> &RedirectUrl {
        &self.redirect_url
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> ReminderStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the completion status.
    ///
    /// Any status may follow any other; no transition graph is enforced.
    pub fn mark_status(&mut self, status: ReminderStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Moves the due timestamp to a new point in time.
    pub fn reschedule(&mut self, due_at: DateTime<Utc>, clock: &impl Clock) {
        self.set_due_at(Some(due_at), clock);
    }

    /// Sets or clears the due timestamp.
    pub fn set_due_at(&mut self, due_at: Option<DateTime<Utc>>, clock: &impl Clock) {
        self.due_at = due_at;
        self.touch(clock);
    }

    /// Replaces the task title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the task category.
    pub fn recategorize(&mut self, task_type: ReminderTaskType, clock: &impl Clock) {
        self.task_type = task_type;
        self.touch(clock);
    }

    /// Replaces the redirect URL.
    pub fn redirect_to(&mut self, redirect_url: RedirectUrl, clock: &impl Clock) {
        self.redirect_url = redirect_url;
        self.touch(clock);
    }

    /// Sets or clears the job reference.
    pub fn link_job(&mut self, job_id: Option<JobId>, clock: &impl Clock) {
        self.job_id = job_id;
        self.touch(clock);
    }

    /// Sets or clears the candidate reference.
    pub fn link_candidate(&mut self, candidate_id: Option<CandidateId>, clock: &impl Clock) {
        self.candidate_id = candidate_id;
        self.touch(clock);
    }

    /// Updates `updated_at` to the current clock time.
    ///
    /// The value is clamped so `updated_at` never drops below `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}
