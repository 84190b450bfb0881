//! Application services for reminder task storage.

mod store;

pub use store::{
    CreateReminderRequest, ReminderServiceError, ReminderServiceResult, ReminderTaskService,
    RescheduleRequest, UpdateReminderRequest, UpdateStatusRequest,
};
