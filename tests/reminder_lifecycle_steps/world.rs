//! Shared world state for reminder lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tickler::reminder::{
    adapters::memory::InMemoryReminderTaskRepository,
    domain::{EmployerId, ReminderTask},
    services::{ReminderServiceError, ReminderTaskService},
};
use uuid::Uuid;

/// Service type used by the BDD world.
pub type TestReminderService = ReminderTaskService<InMemoryReminderTaskRepository, DefaultClock>;

/// Scenario world for reminder lifecycle behaviour tests.
pub struct ReminderWorld {
    /// Service under test.
    pub service: TestReminderService,
    /// Employer owning the scenario's reminders.
    pub employer_id: EmployerId,
    /// Most recently created or mutated reminder.
    pub last_reminder: Option<ReminderTask>,
    /// Outcome of the most recent status change or reschedule.
    pub last_result: Option<Result<ReminderTask, ReminderServiceError>>,
}

impl ReminderWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = ReminderTaskService::new(
            Arc::new(InMemoryReminderTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            employer_id: EmployerId::from_uuid(Uuid::new_v4()),
            last_reminder: None,
            last_result: None,
        }
    }
}

impl Default for ReminderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReminderWorld {
    ReminderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
