//! Repository for the `workers` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::worker::{ListWorkersParams, NewWorker, UpdateWorker, Worker};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, position, password_hash, created_at";

/// Provides CRUD operations for workers.
pub struct WorkerRepo;

impl WorkerRepo {
    /// Insert a new worker, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewWorker) -> Result<Worker, sqlx::Error> {
        let query = format!(
            "INSERT INTO workers (username, email, position, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Worker>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.position)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a worker by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workers WHERE id = $1");
        sqlx::query_as::<_, Worker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a worker by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workers WHERE username = $1");
        sqlx::query_as::<_, Worker>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a worker by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workers WHERE email = $1");
        sqlx::query_as::<_, Worker>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a worker by email, excluding a given ID. Used to re-check
    /// email uniqueness on update.
    pub async fn find_by_email_excluding(
        pool: &PgPool,
        email: &str,
        exclude_id: DbId,
    ) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workers WHERE email = $1 AND id <> $2");
        sqlx::query_as::<_, Worker>(&query)
            .bind(email)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// List workers with an optional exact position filter and pagination.
    ///
    /// Returns `(page_items, total_matching)`.
    pub async fn list(
        pool: &PgPool,
        params: &ListWorkersParams,
    ) -> Result<(Vec<Worker>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM workers WHERE ($1::text IS NULL OR position = $1)",
        )
        .bind(&params.position)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM workers
             WHERE ($1::text IS NULL OR position = $1)
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Worker>(&query)
            .bind(&params.position)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Update a worker. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorker,
    ) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!(
            "UPDATE workers SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                position = COALESCE($4, position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Worker>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete a worker by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
