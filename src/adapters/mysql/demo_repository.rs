//! MySQL implementation of DemoRepository.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use super::error::{map_query_error, map_write_error};
use crate::domain::demo::{Demo, DemoFilter, DemoPatch, NewDemo, DELETED};
use crate::domain::error::{AppError, ErrorCode};
use crate::ports::DemoRepository;

const DEMO_COLUMNS: &str = "id, field1, field2, is_deleted, create_time, update_time";

/// MySQL implementation of DemoRepository.
#[derive(Clone)]
pub struct MySqlDemoRepository {
    pool: MySqlPool,
}

impl MySqlDemoRepository {
    /// Creates a new MySqlDemoRepository.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DemoRepository for MySqlDemoRepository {
    async fn list(&self, filter: &DemoFilter) -> Result<Vec<Demo>, AppError> {
        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new(format!("SELECT {DEMO_COLUMNS} FROM demo WHERE 1 = 1"));
        if let Some(field1) = filter.field1 {
            query.push(" AND field1 = ").push_bind(field1);
        }
        if let Some(field2) = &filter.field2 {
            query.push(" AND field2 = ").push_bind(field2);
        }

        query
            .build_query_as::<Demo>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)
    }

    async fn list_page(&self, page: u32, page_size: u32) -> Result<(Vec<Demo>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM demo")
            .fetch_one(&self.pool)
            .await
            .map_err(map_query_error)?;

        let offset = i64::from(page - 1) * i64::from(page_size);
        let rows = sqlx::query_as::<_, Demo>(&format!(
            "SELECT {DEMO_COLUMNS} FROM demo ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Demo>, AppError> {
        sqlx::query_as::<_, Demo>(&format!(
            "SELECT {DEMO_COLUMNS} FROM demo WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_query_error)
    }

    async fn create(&self, demo: &NewDemo) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO demo (field1, field2) VALUES (?, ?)")
            .bind(demo.field1)
            .bind(&demo.field2)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.last_insert_id() as i64)
    }

    async fn create_batch(&self, demos: &[NewDemo]) -> Result<(), AppError> {
        if demos.is_empty() {
            return Ok(());
        }

        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new("INSERT INTO demo (field1, field2) ");
        query.push_values(demos, |mut row, demo| {
            row.push_bind(demo.field1).push_bind(&demo.field2);
        });

        query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, id: i64, patch: &DemoPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::business(
                ErrorCode::ParamInvalid,
                "no fields to update",
            ));
        }

        let mut query: QueryBuilder<MySql> = QueryBuilder::new("UPDATE demo SET ");
        let mut assignments = query.separated(", ");
        if let Some(field1) = patch.field1 {
            assignments.push("field1 = ").push_bind_unseparated(field1);
        }
        if let Some(field2) = &patch.field2 {
            assignments.push("field2 = ").push_bind_unseparated(field2);
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("demo {id} not found")));
        }

        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE demo SET is_deleted = ? WHERE id = ?")
            .bind(DELETED)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("demo {id} not found")));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM demo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("demo {id} not found")));
        }

        Ok(())
    }
}
