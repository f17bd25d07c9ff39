//! Generic CRUD execution for any [`Resource`].

use crate::error::AppError;
use crate::model::{Insertable, Resource};
use crate::sql::{delete, exists_by_id, insert, select_all, select_by_id, select_where_eq, select_where_not_null};
use sqlx::AnyPool;

pub struct CrudService;

impl CrudService {
    /// Every row, ordered by id.
    pub async fn list<R: Resource>(pool: &AnyPool) -> Result<Vec<R>, AppError> {
        let sql = select_all(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Rows whose `column` equals `value`, ordered by id.
    pub async fn list_where<R: Resource>(pool: &AnyPool, column: &str, value: i64) -> Result<Vec<R>, AppError> {
        let sql = select_where_eq(R::TABLE, R::COLUMNS, column);
        tracing::debug!(sql = %sql, value, "query");
        let rows = sqlx::query_as::<_, R>(&sql).bind(value).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Rows whose `column` is not null, ordered by id.
    pub async fn list_where_set<R: Resource>(pool: &AnyPool, column: &str) -> Result<Vec<R>, AppError> {
        let sql = select_where_not_null(R::TABLE, R::COLUMNS, column);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key.
    pub async fn read<R: Resource>(pool: &AnyPool, id: i64) -> Result<Option<R>, AppError> {
        let sql = select_by_id(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, R>(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Like [`CrudService::read`], but a missing row is `AppError::NotFound`.
    pub async fn get<R: Resource>(pool: &AnyPool, id: i64) -> Result<R, AppError> {
        Self::read::<R>(pool, id)
            .await?
            .ok_or_else(|| not_found(R::NAME, id))
    }

    pub async fn exists(pool: &AnyPool, table: &str, id: i64) -> Result<bool, AppError> {
        let sql = exists_by_id(table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row.is_some())
    }

    /// Validate and insert one row. Returns the stored row with its assigned id.
    pub async fn create<R: Resource>(pool: &AnyPool, new: R::New) -> Result<R, AppError> {
        new.validate()?;
        let sql = insert(R::TABLE, new.columns(), R::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let row = new.bind(sqlx::query_as::<_, R>(&sql)).fetch_one(pool).await?;
        Ok(row)
    }

    /// Delete one row by id. Returns the deleted row, or `AppError::NotFound`.
    pub async fn delete<R: Resource>(pool: &AnyPool, id: i64) -> Result<R, AppError> {
        let sql = delete(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(R::NAME, id))?;
        tracing::info!(table = R::TABLE, id, "deleted");
        Ok(row)
    }
}

pub(crate) fn not_found(name: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} {}", name, id))
}
