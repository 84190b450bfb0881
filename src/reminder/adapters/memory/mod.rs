//! In-memory adapters for reminder task persistence.

mod reminder_task;

pub use reminder_task::InMemoryReminderTaskRepository;
