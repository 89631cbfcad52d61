//! Shared response envelope types for API handlers.
//!
//! Derived views (dashboard, hour variance) are wrapped in a `{ "data": ... }`
//! envelope. Entity CRUD endpoints return the row itself.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: dashboard }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
