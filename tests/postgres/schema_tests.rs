//! Idempotent schema initialization tests.

use super::helpers::{BoxError, test_pool, test_service};
use tickler::reminder::adapters::postgres::ensure_schema;
use tickler::reminder::domain::EmployerId;
use tickler::reminder::services::CreateReminderRequest;
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread")]
async fn schema_initialization_is_idempotent() -> Result<(), BoxError> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };

    // test_pool already applied the schema once; two further applications
    // must also succeed without duplicate definitions.
    let mut connection = pool.get()?;
    ensure_schema(&mut connection)?;
    ensure_schema(&mut connection)?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn reinitialized_schema_still_accepts_writes() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };

    let created = service
        .create(CreateReminderRequest::new(
            EmployerId::from_uuid(Uuid::new_v4()),
            "Post-reinitialization write",
            "other",
            "https://app/tasks",
        ))
        .await?;
    let fetched = service.get(created.id()).await?;
    assert_eq!(fetched, created);
    Ok(())
}
