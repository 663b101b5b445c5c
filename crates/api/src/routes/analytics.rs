//! Route definitions for the `/analytics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(analytics::list_analytics).post(analytics::create_analytic),
        )
        .route(
            "/{id}",
            get(analytics::get_analytic)
                .put(analytics::update_analytic)
                .delete(analytics::delete_analytic),
        )
}
