//! `PostgreSQL` adapters for reminder task persistence.

mod models;
mod repository;
mod schema;
mod setup;
mod types;

pub use repository::{PostgresReminderTaskRepository, ReminderPgPool};
pub use setup::ensure_schema;

#[cfg(test)]
pub(crate) use models::ReminderTaskRow;
#[cfg(test)]
pub(crate) use repository::{row_to_reminder, to_new_row};
#[cfg(test)]
pub(crate) use types::{StatusValue, TaskTypeValue};
