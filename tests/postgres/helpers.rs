//! Shared helpers for `PostgreSQL` integration tests.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use tickler::reminder::adapters::postgres::{
    PostgresReminderTaskRepository, ReminderPgPool, ensure_schema,
};
use tickler::reminder::services::ReminderTaskService;

/// Boxed error type shared by the integration tests.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service type used by the `PostgreSQL` tests.
pub type PgService = ReminderTaskService<PostgresReminderTaskRepository, DefaultClock>;

/// Environment variable naming the test database.
pub const DATABASE_URL_VAR: &str = "TICKLER_TEST_DATABASE_URL";

/// Builds a pool against the configured test database with the schema
/// applied.
///
/// Returns `Ok(None)` when [`DATABASE_URL_VAR`] is unset.
///
/// # Errors
///
/// Returns an error when the pool cannot be built or the schema cannot be
/// applied.
pub fn test_pool() -> Result<Option<ReminderPgPool>, BoxError> {
    let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
        return Ok(None);
    };
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool: ReminderPgPool = Pool::builder().max_size(2).build(manager)?;
    let mut connection = pool.get()?;
    ensure_schema(&mut connection)?;
    Ok(Some(pool))
}

/// Builds a repository and service over the configured test database.
///
/// Returns `Ok(None)` when [`DATABASE_URL_VAR`] is unset.
///
/// # Errors
///
/// Returns an error when the pool cannot be built or the schema cannot be
/// applied.
pub fn test_service() -> Result<Option<(Arc<PostgresReminderTaskRepository>, PgService)>, BoxError>
{
    let Some(pool) = test_pool()? else {
        return Ok(None);
    };
    let repository = Arc::new(PostgresReminderTaskRepository::new(pool));
    let service = ReminderTaskService::new(repository.clone(), Arc::new(DefaultClock));
    Ok(Some((repository, service)))
}
