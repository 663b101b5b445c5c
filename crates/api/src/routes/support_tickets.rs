//! Route definitions for the `/support_tickets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::support_tickets;
use crate::state::AppState;

/// Routes mounted at `/support_tickets`.
///
/// `/status` is a static segment and takes priority over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(support_tickets::list_support_tickets).post(support_tickets::create_support_ticket),
        )
        .route("/status", get(support_tickets::get_ticket_status))
        .route(
            "/{id}",
            get(support_tickets::get_support_ticket)
                .put(support_tickets::update_support_ticket)
                .delete(support_tickets::delete_support_ticket),
        )
}
