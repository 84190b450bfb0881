//! CRUD, listing, and due-window tests against a real database.
//!
//! Each test works under a freshly generated employer so runs stay isolated
//! even though the table is shared.

use super::helpers::{BoxError, test_service};
use chrono::{Duration, Utc};
use tickler::reminder::{
    domain::{EmployerId, ReminderStatus, ReminderTask},
    ports::{ReminderRepositoryError, ReminderTaskRepository},
    services::{CreateReminderRequest, ReminderServiceError, UpdateStatusRequest},
};
use uuid::Uuid;

fn employer() -> EmployerId {
    EmployerId::from_uuid(Uuid::new_v4())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_fetch_round_trips() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };

    let due = Utc::now() + Duration::days(3);
    let created = service
        .create(
            CreateReminderRequest::new(
                employer(),
                "Persist reminder round trip",
                "interview",
                "https://app/interviews/5",
            )
            .with_due_at(due),
        )
        .await?;

    let fetched = service.get(created.id()).await?;
    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.title(), created.title());
    assert_eq!(fetched.task_type(), created.task_type());
    assert_eq!(fetched.status(), ReminderStatus::Pending);
    assert_eq!(
        fetched
            .due_at()
            .map(|due_at| due_at.timestamp_micros()),
        Some(due.timestamp_micros())
    );
    assert_eq!(
        fetched.created_at().timestamp_micros(),
        created.created_at().timestamp_micros()
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected() -> Result<(), BoxError> {
    let Some((repository, service)) = test_service()? else {
        return Ok(());
    };

    let created = service
        .create(CreateReminderRequest::new(
            employer(),
            "Duplicate insert target",
            "other",
            "https://app/tasks",
        ))
        .await?;

    let duplicate = repository.insert(&created).await;
    assert!(matches!(
        duplicate,
        Err(ReminderRepositoryError::DuplicateTask(id)) if id == created.id()
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn status_update_persists_and_refreshes_updated_at() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };

    let created = service
        .create(CreateReminderRequest::new(
            employer(),
            "Mark me done",
            "message",
            "https://app/inbox",
        ))
        .await?;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = service
        .update_status(UpdateStatusRequest::new(created.id(), "done"))
        .await?;
    assert_eq!(updated.status(), ReminderStatus::Done);

    let fetched = service.get(created.id()).await?;
    assert_eq!(fetched.status(), ReminderStatus::Done);
    assert!(fetched.updated_at() > fetched.created_at());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_mutates_nothing() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };

    let result = service
        .update_status(UpdateStatusRequest::new(
            tickler::reminder::domain::ReminderTaskId::new(),
            "done",
        ))
        .await;
    assert!(matches!(
        result,
        Err(ReminderServiceError::Repository(
            ReminderRepositoryError::NotFound(_)
        ))
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn employer_status_listing_preserves_creation_order() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };
    let owner = employer();

    let mut expected = Vec::new();
    for title in ["First", "Second", "Third"] {
        let created = service
            .create(CreateReminderRequest::new(
                owner,
                title,
                "other",
                "https://app/tasks",
            ))
            .await?;
        expected.push(created.id());
    }

    let listed = service
        .list_by_employer_and_status(owner, ReminderStatus::Pending)
        .await?;
    let ids: Vec<_> = listed.iter().map(ReminderTask::id).collect();
    assert_eq!(ids, expected);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn due_listing_excludes_terminal_and_undated_tasks() -> Result<(), BoxError> {
    let Some((_, service)) = test_service()? else {
        return Ok(());
    };
    let owner = employer();
    let cutoff = Utc::now() + Duration::hours(1);

    let due_soon = service
        .create(
            CreateReminderRequest::new(owner, "Due soon", "other", "https://app/tasks")
                .with_due_at(cutoff - Duration::minutes(10)),
        )
        .await?;
    service
        .create(CreateReminderRequest::new(
            owner,
            "Undated",
            "other",
            "https://app/tasks",
        ))
        .await?;
    let handled = service
        .create(
            CreateReminderRequest::new(owner, "Handled", "other", "https://app/tasks")
                .with_due_at(cutoff - Duration::minutes(20)),
        )
        .await?;
    service
        .update_status(UpdateStatusRequest::new(handled.id(), "ignored"))
        .await?;

    let due = service.list_due_before(cutoff).await?;
    // The table is shared across tests, so assert membership rather than an
    // exact result set.
    assert!(due.iter().any(|task| task.id() == due_soon.id()));
    assert!(due.iter().all(|task| task.status() == ReminderStatus::Pending));
    assert!(due.iter().all(|task| task.id() != handled.id()));
    assert!(
        due.iter()
            .all(|task| task.due_at().is_some_and(|due_at| due_at <= cutoff))
    );
    Ok(())
}
