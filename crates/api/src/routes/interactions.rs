//! Route definitions for the `/interactions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::interactions;
use crate::state::AppState;

/// Routes mounted at `/interactions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(interactions::list_interactions).post(interactions::create_interaction),
        )
        .route(
            "/{id}",
            get(interactions::get_interaction)
                .put(interactions::update_interaction)
                .delete(interactions::delete_interaction),
        )
}
