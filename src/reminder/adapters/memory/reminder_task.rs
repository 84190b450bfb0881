//! In-memory repository for reminder task tests and embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::reminder::{
    domain::{EmployerId, ReminderStatus, ReminderTask, ReminderTaskId},
    ports::{ReminderRepositoryError, ReminderRepositoryResult, ReminderTaskRepository},
};

/// Thread-safe in-memory reminder task repository.
///
/// Insertion order is tracked explicitly so listings match the creation
/// order the Postgres adapter derives from `created_at`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderTaskRepository {
    state: Arc<RwLock<InMemoryReminderState>>,
}

#[derive(Debug, Default)]
struct InMemoryReminderState {
    tasks: HashMap<ReminderTaskId, ReminderTask>,
    insertion_order: Vec<ReminderTaskId>,
}

impl InMemoryReminderTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects tasks in insertion order that satisfy `keep`.
fn collect_in_order(
    state: &InMemoryReminderState,
    keep: impl Fn(&ReminderTask) -> bool,
) -> Vec<ReminderTask> {
    state
        .insertion_order
        .iter()
        .filter_map(|id| state.tasks.get(id))
        .filter(|task| keep(task))
        .cloned()
        .collect()
}

fn lock_poisoned(err: impl std::fmt::Display) -> ReminderRepositoryError {
    ReminderRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReminderTaskRepository for InMemoryReminderTaskRepository {
    async fn insert(&self, task: &ReminderTask) -> ReminderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(ReminderRepositoryError::DuplicateTask(task.id()));
        }

        state.insertion_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &ReminderTask) -> ReminderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(ReminderRepositoryError::NotFound(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ReminderTaskId,
    ) -> ReminderRepositoryResult<Option<ReminderTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_employer(
        &self,
        employer_id: EmployerId,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(collect_in_order(&state, |task| {
            task.employer_id() == employer_id
        }))
    }

    async fn list_by_employer_and_status(
        &self,
        employer_id: EmployerId,
        status: ReminderStatus,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(collect_in_order(&state, |task| {
            task.employer_id() == employer_id && task.status() == status
        }))
    }

    async fn list_due_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut due = collect_in_order(&state, |task| {
            task.status() == ReminderStatus::Pending
                && task.due_at().is_some_and(|due_at| due_at <= cutoff)
        });
        due.sort_by_key(ReminderTask::due_at);
        Ok(due)
    }
}
