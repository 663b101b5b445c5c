//! Repository for the `sales_leads` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::sales_lead::{
    CreateSalesLead, ListSalesLeadsParams, SalesLead, UpdateSalesLead,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, status, created_at";

/// Provides CRUD operations for sales leads.
pub struct SalesLeadRepo;

impl SalesLeadRepo {
    /// Insert a new sales lead, returning the created row.
    ///
    /// `fk_sales_leads_customer` rejects unknown customer ids; the
    /// handler pre-checks so the client gets a clean 404 first.
    pub async fn create(pool: &PgPool, input: &CreateSalesLead) -> Result<SalesLead, sqlx::Error> {
        let query = format!(
            "INSERT INTO sales_leads (customer_id, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalesLead>(&query)
            .bind(input.customer_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a sales lead by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SalesLead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales_leads WHERE id = $1");
        sqlx::query_as::<_, SalesLead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sales leads with optional customer/status filters and pagination.
    ///
    /// Returns `(page_items, total_matching)`.
    pub async fn list(
        pool: &PgPool,
        params: &ListSalesLeadsParams,
    ) -> Result<(Vec<SalesLead>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sales_leads
             WHERE ($1::bigint IS NULL OR customer_id = $1)
               AND ($2::text IS NULL OR status = $2)",
        )
        .bind(params.customer_id)
        .bind(&params.status)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM sales_leads
             WHERE ($1::bigint IS NULL OR customer_id = $1)
               AND ($2::text IS NULL OR status = $2)
             ORDER BY id ASC
             LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, SalesLead>(&query)
            .bind(params.customer_id)
            .bind(&params.status)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Update a sales lead. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSalesLead,
    ) -> Result<Option<SalesLead>, sqlx::Error> {
        let query = format!(
            "UPDATE sales_leads SET status = COALESCE($2, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalesLead>(&query)
            .bind(id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sales lead by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sales_leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
