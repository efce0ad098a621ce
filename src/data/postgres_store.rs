use crate::{
    data::{
        StudentStore,
        student::{NewStudent, Student},
    },
    error::{MakeQuerySnafu, MigrateSnafu, OpenDatabaseSnafu, RosterResult},
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: Pool<Postgres>,
}

impl PgStudentStore {
    /// Connects and brings the schema up to date. Either failing means we can't serve anything.
    pub async fn new(options: PgPoolOptions, connect_options: PgConnectOptions) -> RosterResult<Self> {
        let pool = options
            .connect_with(connect_options)
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM public.students")
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_from_db_by_id(&self, id: i32) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM public.students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<i32> {
        let NewStudent {
            first_name,
            last_name,
            department,
            gpa,
        } = to_be_added;

        sqlx::query_scalar::<_, i32>("INSERT INTO public.students (firstname, lastname, department, gpa) VALUES ($1, $2, $3, $4) RETURNING id")
            .bind(first_name)
            .bind(last_name)
            .bind(department)
            .bind(gpa)
            .fetch_one(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn update_in_database(&self, student: Student) -> RosterResult<()> {
        let Student {
            id,
            first_name,
            last_name,
            department,
            gpa,
        } = student;

        sqlx::query("UPDATE public.students SET firstname = $1, lastname = $2, department = $3, gpa = $4 WHERE id = $5")
            .bind(first_name)
            .bind(last_name)
            .bind(department)
            .bind(gpa)
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }

    async fn remove_from_database(&self, id: i32) -> RosterResult<()> {
        sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}
