//! Route definitions for the `/worklogs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_log;
use crate::state::AppState;

/// Routes mounted at `/worklogs`.
///
/// ```text
/// GET    /       -> list (?project_id=&month=YYYY-MM&work_type=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work_log::list).post(work_log::create))
        .route(
            "/{id}",
            get(work_log::get_by_id)
                .put(work_log::update)
                .delete(work_log::delete),
        )
}
