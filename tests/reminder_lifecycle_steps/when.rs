//! When steps for reminder lifecycle BDD scenarios.

use super::world::{ReminderWorld, run_async};
use chrono::{DateTime, Utc};
use rstest_bdd_macros::when;
use tickler::reminder::services::{RescheduleRequest, UpdateStatusRequest};

#[when(r#"the reminder status is changed to "{status}""#)]
fn change_status(world: &mut ReminderWorld, status: String) -> Result<(), eyre::Report> {
    let reminder = world
        .last_reminder
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created reminder in scenario world"))?;

    let result = run_async(
        world
            .service
            .update_status(UpdateStatusRequest::new(reminder.id(), status)),
    );
    if let Ok(ref updated) = result {
        world.last_reminder = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the reminder is rescheduled to "{due}""#)]
fn reschedule_reminder(world: &mut ReminderWorld, due: String) -> Result<(), eyre::Report> {
    let reminder = world
        .last_reminder
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created reminder in scenario world"))?;
    let due_at = DateTime::parse_from_rfc3339(&due)
        .map_err(|err| eyre::eyre!("invalid due timestamp in scenario: {err}"))?
        .with_timezone(&Utc);

    let result = run_async(
        world
            .service
            .reschedule(RescheduleRequest::new(reminder.id(), due_at)),
    );
    if let Ok(ref updated) = result {
        world.last_reminder = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}
