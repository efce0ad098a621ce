use crate::error::{MissingFieldSnafu, ParseIdSnafu, RosterResult};
use async_trait::async_trait;
use serde::Deserialize;
use snafu::{ResultExt, ensure};

pub mod postgres_store;
pub mod student;

#[cfg(test)]
pub mod memory_store;

use student::{NewStudent, Student};

/// The `id` query parameter used by the show, update-form and delete routes.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct IdQuery {
    pub id: String,
}

impl IdQuery {
    pub fn parse(&self) -> RosterResult<i32> {
        parse_id(&self.id)
    }
}

pub fn parse_id(raw: &str) -> RosterResult<i32> {
    ensure!(!raw.is_empty(), MissingFieldSnafu { field: "id" });
    raw.parse().context(ParseIdSnafu { original: raw })
}

/// Everything the handlers need from storage.
///
/// `get_from_db_by_id` reports a missing row as `Ok(None)`, never as an error, and
/// neither `update_in_database` nor `remove_from_database` care whether a row matched.
#[async_trait]
pub trait StudentStore: Clone + Send + Sync + 'static {
    async fn get_all(&self) -> RosterResult<Vec<Student>>;
    async fn get_from_db_by_id(&self, id: i32) -> RosterResult<Option<Student>>;
    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<i32>;
    async fn update_in_database(&self, student: Student) -> RosterResult<()>;
    async fn remove_from_database(&self, id: i32) -> RosterResult<()>;
}
