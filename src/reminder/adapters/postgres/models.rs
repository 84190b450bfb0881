//! Diesel row models for reminder task persistence.

use super::schema::reminder_tasks;
use super::types::{StatusValue, TaskTypeValue};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for reminder task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reminder_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReminderTaskRow {
    /// Reminder task identifier.
    pub id: uuid::Uuid,
    /// Owning employer identifier.
    pub employer_id: uuid::Uuid,
    /// Optional job posting reference.
    pub job_id: Option<uuid::Uuid>,
    /// Optional candidate reference.
    pub candidate_id: Option<uuid::Uuid>,
    /// Task title text.
    pub task_title: String,
    /// Task category.
    pub task_type: TaskTypeValue,
    /// Redirect URL text.
    pub redirect_url: String,
    /// Optional due timestamp.
    pub due_at: Option<DateTime<Utc>>,
    /// Completion status.
    pub status: StatusValue,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for reminder task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reminder_tasks)]
pub struct NewReminderTaskRow {
    /// Reminder task identifier.
    pub id: uuid::Uuid,
    /// Owning employer identifier.
    pub employer_id: uuid::Uuid,
    /// Optional job posting reference.
    pub job_id: Option<uuid::Uuid>,
    /// Optional candidate reference.
    pub candidate_id: Option<uuid::Uuid>,
    /// Task title text.
    pub task_title: String,
    /// Task category.
    pub task_type: TaskTypeValue,
    /// Redirect URL text.
    pub redirect_url: String,
    /// Optional due timestamp.
    pub due_at: Option<DateTime<Utc>>,
    /// Completion status.
    pub status: StatusValue,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
