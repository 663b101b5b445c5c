//! Repository for the `analytics` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::analytics::{Analytics, ListAnalyticsParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, data, created_at";

/// Provides CRUD operations for analytics entries.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Insert a new analytics entry, returning the created row.
    pub async fn create(pool: &PgPool, data: &str) -> Result<Analytics, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics (data) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Analytics>(&query)
            .bind(data)
            .fetch_one(pool)
            .await
    }

    /// Find an analytics entry by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Analytics>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM analytics WHERE id = $1");
        sqlx::query_as::<_, Analytics>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List analytics entries with pagination.
    ///
    /// Returns `(page_items, total)`.
    pub async fn list(
        pool: &PgPool,
        params: &ListAnalyticsParams,
    ) -> Result<(Vec<Analytics>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analytics")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM analytics ORDER BY id ASC LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Analytics>(&query)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Replace the data payload of an analytics entry.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        data: &str,
    ) -> Result<Option<Analytics>, sqlx::Error> {
        let query = format!(
            "UPDATE analytics SET data = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Analytics>(&query)
            .bind(id)
            .bind(data)
            .fetch_optional(pool)
            .await
    }

    /// Delete an analytics entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM analytics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
