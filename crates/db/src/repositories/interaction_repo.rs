//! Repository for the `interactions` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::interaction::{
    CreateInteraction, Interaction, ListInteractionsParams, UpdateInteraction,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, notes, created_at";

/// Provides CRUD operations for interactions.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Insert a new interaction, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInteraction,
    ) -> Result<Interaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions (customer_id, notes)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(input.customer_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an interaction by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE id = $1");
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List interactions with an optional customer filter and pagination.
    ///
    /// Returns `(page_items, total_matching)`.
    pub async fn list(
        pool: &PgPool,
        params: &ListInteractionsParams,
    ) -> Result<(Vec<Interaction>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interactions
             WHERE ($1::bigint IS NULL OR customer_id = $1)",
        )
        .bind(params.customer_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM interactions
             WHERE ($1::bigint IS NULL OR customer_id = $1)
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Interaction>(&query)
            .bind(params.customer_id)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Update an interaction. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInteraction,
    ) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!(
            "UPDATE interactions SET notes = COALESCE($2, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an interaction by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
