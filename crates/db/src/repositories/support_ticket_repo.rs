//! Repository for the `support_tickets` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::support_ticket::{
    CreateSupportTicket, ListSupportTicketsParams, SupportTicket, TicketStatusCounts,
    UpdateSupportTicket,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, description, status, created_at";

/// Provides CRUD operations for support tickets plus status counts.
pub struct SupportTicketRepo;

impl SupportTicketRepo {
    /// Insert a new support ticket, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSupportTicket,
    ) -> Result<SupportTicket, sqlx::Error> {
        let query = format!(
            "INSERT INTO support_tickets (customer_id, description, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupportTicket>(&query)
            .bind(input.customer_id)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a support ticket by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SupportTicket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM support_tickets WHERE id = $1");
        sqlx::query_as::<_, SupportTicket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List support tickets with optional customer/status filters and pagination.
    ///
    /// Returns `(page_items, total_matching)`.
    pub async fn list(
        pool: &PgPool,
        params: &ListSupportTicketsParams,
    ) -> Result<(Vec<SupportTicket>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM support_tickets
             WHERE ($1::bigint IS NULL OR customer_id = $1)
               AND ($2::text IS NULL OR status = $2)",
        )
        .bind(params.customer_id)
        .bind(&params.status)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM support_tickets
             WHERE ($1::bigint IS NULL OR customer_id = $1)
               AND ($2::text IS NULL OR status = $2)
             ORDER BY id ASC
             LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, SupportTicket>(&query)
            .bind(params.customer_id)
            .bind(&params.status)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Count tickets per well-known status in a single scan.
    pub async fn status_counts(pool: &PgPool) -> Result<TicketStatusCounts, sqlx::Error> {
        let row: (i64, i64, i64) = sqlx::query_as(
            "SELECT
                COUNT(*) FILTER (WHERE status = 'active'),
                COUNT(*) FILTER (WHERE status = 'deactivated'),
                COUNT(*) FILTER (WHERE status = 'in process')
             FROM support_tickets",
        )
        .fetch_one(pool)
        .await?;

        Ok(TicketStatusCounts {
            active: row.0,
            deactivated: row.1,
            in_process: row.2,
        })
    }

    /// Update a support ticket. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupportTicket,
    ) -> Result<Option<SupportTicket>, sqlx::Error> {
        let query = format!(
            "UPDATE support_tickets SET
                description = COALESCE($2, description),
                status = COALESCE($3, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupportTicket>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a support ticket by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM support_tickets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
