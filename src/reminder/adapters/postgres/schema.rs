//! Diesel schema for reminder task persistence.

/// Custom `PostgreSQL` enum types backing the reminder columns.
pub mod sql_types {
    /// The `reminder_task_status` enum type.
    #[derive(diesel::query_builder::QueryId, Clone, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "reminder_task_status"))]
    pub struct ReminderTaskStatus;

    /// The `reminder_task_type` enum type.
    #[derive(diesel::query_builder::QueryId, Clone, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "reminder_task_type"))]
    pub struct ReminderTaskType;
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::{ReminderTaskStatus, ReminderTaskType};

    /// Reminder task records owned by employers.
    reminder_tasks (id) {
        /// Reminder task identifier.
        id -> Uuid,
        /// Owning employer identifier.
        employer_id -> Uuid,
        /// Optional job posting reference.
        job_id -> Nullable<Uuid>,
        /// Optional candidate reference.
        candidate_id -> Nullable<Uuid>,
        /// Short description of the follow-up work.
        #[max_length = 255]
        task_title -> Varchar,
        /// Category of the follow-up work.
        task_type -> ReminderTaskType,
        /// Where the consumer should be sent to act on the task.
        #[max_length = 1024]
        redirect_url -> Varchar,
        /// Optional due timestamp.
        due_at -> Nullable<Timestamptz>,
        /// Completion status.
        status -> ReminderTaskStatus,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
