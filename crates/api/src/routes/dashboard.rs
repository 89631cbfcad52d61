//! Route definitions for derived project metrics.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET  /{project_id}         -> get_dashboard
/// GET  /{project_id}/hours   -> get_hour_variance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{project_id}", get(dashboard::get_dashboard))
        .route("/{project_id}/hours", get(dashboard::get_hour_variance))
}
