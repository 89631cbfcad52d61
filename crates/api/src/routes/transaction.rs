//! Route definitions for the `/transactions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET    /       -> list (?project_id=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transaction::list).post(transaction::create))
        .route(
            "/{id}",
            get(transaction::get_by_id)
                .put(transaction::update)
                .delete(transaction::delete),
        )
}
