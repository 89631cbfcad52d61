pub mod dashboard;
pub mod engineer;
pub mod health;
pub mod project;
pub mod transaction;
pub mod work_log;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list, create
/// /projects/{id}                             get, update, delete
///
/// /engineers                                 list, create
/// /engineers/{id}                            get, update, delete
///
/// /worklogs?project_id=&month=&work_type= list (filtered), create
/// /worklogs/{id}                             get, update, delete
///
/// /transactions?project_id=                  list (filtered), create
/// /transactions/{id}                         get, update, delete
///
/// /dashboard/{project_id}                    financial summary
/// /dashboard/{project_id}/hours?month=       planned vs actual hours
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/engineers", engineer::router())
        .nest("/worklogs", work_log::router())
        .nest("/transactions", transaction::router())
        .nest("/dashboard", dashboard::router())
}
