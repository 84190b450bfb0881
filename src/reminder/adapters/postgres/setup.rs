//! Idempotent schema initialization for reminder task storage.

use diesel::QueryResult;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

/// SQL creating the reminder enum types, table, and indexes.
///
/// Every statement carries its own existence guard, so the script can be
/// applied repeatedly and by concurrent initializers.
const CREATE_REMINDER_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-08-07-000000_create_reminder_tasks/up.sql");

/// Applies the reminder task schema to the connected database.
///
/// Re-running against an initialized database is a no-op.
///
/// # Errors
///
/// Returns the underlying Diesel error when the database rejects the DDL
/// (for example on insufficient privileges); callers should treat this as
/// fatal to startup.
pub fn ensure_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(CREATE_REMINDER_TASKS_SQL)
}
