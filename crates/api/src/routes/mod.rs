//! Route definitions, one module per resource.

pub mod analytics;
pub mod customers;
pub mod health;
pub mod interactions;
pub mod sales_leads;
pub mod support_tickets;
pub mod workers;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// ```text
/// /customers            list, create; /{id} get, update, delete
/// /workers              register/login/logout + CRUD
/// /sales_leads          list, create; /{id} get, update, delete
/// /interactions         list, create; /{id} get, update, delete
/// /support_tickets      list, create, /status counts; /{id} get, update, delete
/// /analytics            list, create; /{id} get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/workers", workers::router())
        .nest("/sales_leads", sales_leads::router())
        .nest("/interactions", interactions::router())
        .nest("/support_tickets", support_tickets::router())
        .nest("/analytics", analytics::router())
}
