//! Route definitions for the `/sales_leads` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sales_leads;
use crate::state::AppState;

/// Routes mounted at `/sales_leads`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sales_leads::list_sales_leads).post(sales_leads::create_sales_lead),
        )
        .route(
            "/{id}",
            get(sales_leads::get_sales_lead)
                .put(sales_leads::update_sales_lead)
                .delete(sales_leads::delete_sales_lead),
        )
}
