use crate::{
    data::{
        StudentStore,
        student::{NewStudent, Student},
    },
    error::{MakeQuerySnafu, RosterResult},
};
use async_trait::async_trait;
use snafu::IntoError;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Default, Debug)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Student>,
}

/// Stands in for postgres in tests - same contract, rows live in a map.
#[derive(Clone, Default, Debug)]
pub struct MemoryStudentStore {
    table: Arc<RwLock<Table>>,
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_from_db_by_id(&self, id: i32) -> RosterResult<Option<Student>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<i32> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, to_be_added.with_id(id));
        Ok(id)
    }

    async fn update_in_database(&self, student: Student) -> RosterResult<()> {
        if let Some(existing) = self.table.write().await.rows.get_mut(&student.id) {
            *existing = student;
        }
        Ok(())
    }

    async fn remove_from_database(&self, id: i32) -> RosterResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// Fails every call the way a dropped database connection would.
#[derive(Clone, Default, Debug)]
pub struct UnavailableStudentStore;

#[async_trait]
impl StudentStore for UnavailableStudentStore {
    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        Err(MakeQuerySnafu.into_error(sqlx::Error::PoolClosed))
    }

    async fn get_from_db_by_id(&self, _id: i32) -> RosterResult<Option<Student>> {
        Err(MakeQuerySnafu.into_error(sqlx::Error::PoolClosed))
    }

    async fn insert_into_database(&self, _to_be_added: NewStudent) -> RosterResult<i32> {
        Err(MakeQuerySnafu.into_error(sqlx::Error::PoolClosed))
    }

    async fn update_in_database(&self, _student: Student) -> RosterResult<()> {
        Err(MakeQuerySnafu.into_error(sqlx::Error::PoolClosed))
    }

    async fn remove_from_database(&self, _id: i32) -> RosterResult<()> {
        Err(MakeQuerySnafu.into_error(sqlx::Error::PoolClosed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(first_name: &str, gpa: f32) -> NewStudent {
        NewStudent {
            first_name: first_name.into(),
            last_name: "Lovelace".into(),
            department: "Math".into(),
            gpa,
        }
    }

    #[tokio::test]
    async fn ids_are_positive_and_never_reused() {
        let store = MemoryStudentStore::default();
        let first = store.insert_into_database(new_student("Ada", 4.0)).await.unwrap();
        store.remove_from_database(first).await.unwrap();
        let second = store.insert_into_database(new_student("Ada", 4.0)).await.unwrap();

        assert!(first > 0);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_silent() {
        let store = MemoryStudentStore::default();
        store
            .update_in_database(new_student("Ghost", 1.0).with_id(99))
            .await
            .unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
    }
}
