//! `PostgreSQL` repository implementation for reminder task storage.

use super::{
    models::{NewReminderTaskRow, ReminderTaskRow},
    schema::reminder_tasks,
    types::{StatusValue, TaskTypeValue},
};
use crate::reminder::{
    domain::{
        CandidateId, EmployerId, JobId, PersistedReminderTaskData, RedirectUrl, ReminderStatus,
        ReminderTask, ReminderTaskId, TaskTitle,
    },
    ports::{ReminderRepositoryError, ReminderRepositoryResult, ReminderTaskRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by reminder adapters.
pub type ReminderPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed reminder task repository.
#[derive(Debug, Clone)]
pub struct PostgresReminderTaskRepository {
    pool: ReminderPgPool,
}

impl PostgresReminderTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReminderPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReminderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ReminderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReminderRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ReminderRepositoryError::persistence)?
    }
}

#[async_trait]
impl ReminderTaskRepository for PostgresReminderTaskRepository {
    async fn insert(&self, task: &ReminderTask) -> ReminderRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(reminder_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReminderRepositoryError::DuplicateTask(task_id)
                    }
                    _ => ReminderRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &ReminderTask) -> ReminderRepositoryResult<()> {
        let task_id = task.id();
        let changes = to_new_row(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                reminder_tasks::table.filter(reminder_tasks::id.eq(task_id.into_inner())),
            )
            .set((
                reminder_tasks::job_id.eq(changes.job_id),
                reminder_tasks::candidate_id.eq(changes.candidate_id),
                reminder_tasks::task_title.eq(changes.task_title),
                reminder_tasks::task_type.eq(changes.task_type),
                reminder_tasks::redirect_url.eq(changes.redirect_url),
                reminder_tasks::due_at.eq(changes.due_at),
                reminder_tasks::status.eq(changes.status),
                reminder_tasks::updated_at.eq(changes.updated_at),
            ))
            .execute(connection)
            .map_err(ReminderRepositoryError::persistence)?;

            if affected == 0 {
                return Err(ReminderRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: ReminderTaskId,
    ) -> ReminderRepositoryResult<Option<ReminderTask>> {
        self.run_blocking(move |connection| {
            let row = reminder_tasks::table
                .filter(reminder_tasks::id.eq(id.into_inner()))
                .select(ReminderTaskRow::as_select())
                .first::<ReminderTaskRow>(connection)
                .optional()
                .map_err(ReminderRepositoryError::persistence)?;
            row.map(row_to_reminder).transpose()
        })
        .await
    }

    async fn list_by_employer(
        &self,
        employer_id: EmployerId,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        self.run_blocking(move |connection| {
            let rows = reminder_tasks::table
                .filter(reminder_tasks::employer_id.eq(employer_id.into_inner()))
                .order(reminder_tasks::created_at.asc())
                .select(ReminderTaskRow::as_select())
                .load::<ReminderTaskRow>(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reminder).collect()
        })
        .await
    }

    async fn list_by_employer_and_status(
        &self,
        employer_id: EmployerId,
        status: ReminderStatus,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        self.run_blocking(move |connection| {
            let rows = reminder_tasks::table
                .filter(reminder_tasks::employer_id.eq(employer_id.into_inner()))
                .filter(reminder_tasks::status.eq(StatusValue(status)))
                .order(reminder_tasks::created_at.asc())
                .select(ReminderTaskRow::as_select())
                .load::<ReminderTaskRow>(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reminder).collect()
        })
        .await
    }

    async fn list_due_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<ReminderTask>> {
        self.run_blocking(move |connection| {
            let rows = reminder_tasks::table
                .filter(reminder_tasks::status.eq(StatusValue(ReminderStatus::Pending)))
                .filter(reminder_tasks::due_at.is_not_null())
                .filter(reminder_tasks::due_at.le(cutoff))
                .order(reminder_tasks::due_at.asc())
                .select(ReminderTaskRow::as_select())
                .load::<ReminderTaskRow>(connection)
                .map_err(ReminderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reminder).collect()
        })
        .await
    }
}

pub(crate) fn to_new_row(task: &ReminderTask) -> NewReminderTaskRow {
    NewReminderTaskRow {
        id: task.id().into_inner(),
        employer_id: task.employer_id().into_inner(),
        job_id: task.job_id().map(JobId::into_inner),
        candidate_id: task.candidate_id().map(CandidateId::into_inner),
        task_title: task.title().as_str().to_owned(),
        task_type: TaskTypeValue(task.task_type()),
        redirect_url: task.redirect_url().as_str().to_owned(),
        due_at: task.due_at(),
        status: StatusValue(task.status()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub(crate) fn row_to_reminder(row: ReminderTaskRow) -> ReminderRepositoryResult<ReminderTask> {
    let ReminderTaskRow {
        id,
        employer_id,
        job_id,
        candidate_id,
        task_title,
        task_type,
        redirect_url,
        due_at,
        status,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(task_title).map_err(ReminderRepositoryError::persistence)?;
    let url = RedirectUrl::new(redirect_url).map_err(ReminderRepositoryError::persistence)?;

    let data = PersistedReminderTaskData {
        id: ReminderTaskId::from_uuid(id),
        employer_id: EmployerId::from_uuid(employer_id),
        job_id: job_id.map(JobId::from_uuid),
        candidate_id: candidate_id.map(CandidateId::from_uuid),
        title,
        task_type: task_type.0,
        redirect_url: url,
        due_at,
        status: status.0,
        created_at,
        updated_at,
    };
    Ok(ReminderTask::from_persisted(data))
}
