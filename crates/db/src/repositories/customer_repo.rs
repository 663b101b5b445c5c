//! Repository for the `customers` table.

use crm_core::pagination::{clamp_page, clamp_per_page, offset_for};
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, ListCustomersParams, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, company, address";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// The caller must have validated required fields; relies on
    /// `uq_customers_email` as the final uniqueness arbiter.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (first_name, last_name, email, phone, company, address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by email (case-sensitive exact match).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List customers with optional substring search and pagination.
    ///
    /// Returns `(page_items, total_matching)`. The search term matches
    /// case-insensitively against first_name, last_name, and email.
    pub async fn list(
        pool: &PgPool,
        params: &ListCustomersParams,
    ) -> Result<(Vec<Customer>, i64), sqlx::Error> {
        let per_page = clamp_per_page(params.per_page);
        let page = clamp_page(params.page);
        let pattern = params.search.as_ref().map(|s| format!("%{s}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM customers
             WHERE ($1::text IS NULL
                    OR first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM customers
             WHERE ($1::text IS NULL
                    OR first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1)
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Customer>(&query)
            .bind(&pattern)
            .bind(per_page)
            .bind(offset_for(page, per_page))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                company = COALESCE($6, company),
                address = COALESCE($7, address)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Dependent leads, interactions, and
    /// tickets are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
