//! Route definitions for the `/engineers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::engineer;
use crate::state::AppState;

/// Routes mounted at `/engineers`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(engineer::list).post(engineer::create))
        .route(
            "/{id}",
            get(engineer::get_by_id)
                .put(engineer::update)
                .delete(engineer::delete),
        )
}
