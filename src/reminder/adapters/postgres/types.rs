//! Wire mappings between domain enums and the `PostgreSQL` enum types.
//!
//! `PostgreSQL` transmits enum values as their label text; these wrappers
//! translate labels through the domain parsers so unknown labels surface as
//! deserialization errors instead of panics.

use super::schema::sql_types;
use crate::reminder::domain::{ReminderStatus, ReminderTaskType};
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use std::io::Write;

/// Row value for the `reminder_task_status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, diesel::FromSqlRow, diesel::AsExpression)]
#[diesel(sql_type = sql_types::ReminderTaskStatus)]
pub struct StatusValue(pub ReminderStatus);

impl FromSql<sql_types::ReminderTaskStatus, Pg> for StatusValue {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        let label = std::str::from_utf8(value.as_bytes())?;
        Ok(Self(ReminderStatus::try_from(label)?))
    }
}

impl ToSql<sql_types::ReminderTaskStatus, Pg> for StatusValue {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.0.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

/// Row value for the `reminder_task_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, diesel::FromSqlRow, diesel::AsExpression)]
#[diesel(sql_type = sql_types::ReminderTaskType)]
pub struct TaskTypeValue(pub ReminderTaskType);

impl FromSql<sql_types::ReminderTaskType, Pg> for TaskTypeValue {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        let label = std::str::from_utf8(value.as_bytes())?;
        Ok(Self(ReminderTaskType::try_from(label)?))
    }
}

impl ToSql<sql_types::ReminderTaskType, Pg> for TaskTypeValue {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.0.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}
