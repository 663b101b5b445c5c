//! Route definitions for the `/workers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workers;
use crate::state::AppState;

/// Routes mounted at `/workers`.
///
/// ```text
/// POST   /register  -> register (public)
/// POST   /login     -> login (public)
/// POST   /logout    -> logout (requires auth)
/// GET    /          -> list_workers
/// POST   /          -> create_worker
/// GET    /{id}      -> get_worker
/// PUT    /{id}      -> update_worker
/// DELETE /{id}      -> delete_worker
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(workers::register))
        .route("/login", post(workers::login))
        .route("/logout", post(workers::logout))
        .route("/", get(workers::list_workers).post(workers::create_worker))
        .route(
            "/{id}",
            get(workers::get_worker)
                .put(workers::update_worker)
                .delete(workers::delete_worker),
        )
}
