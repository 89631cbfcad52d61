//! Handlers for derived project metrics.
//!
//! Both endpoints recompute from current records on every request.

use axum::extract::{Path, Query, State};
use axum::Json;
use budget_core::aggregator::{compute_dashboard, compute_hour_variance};
use budget_core::metrics::{Dashboard, HourVariance};
use budget_core::month::MonthRange;
use budget_core::types::DbId;

use crate::error::AppResult;
use crate::query::MonthQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/{project_id}
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let dashboard = compute_dashboard(&state.record_store(), project_id).await?;
    Ok(Json(DataResponse { data: dashboard }))
}

/// GET /api/v1/dashboard/{project_id}/hours?month=YYYY-MM
pub async fn get_hour_variance(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<MonthQuery>,
) -> AppResult<Json<DataResponse<HourVariance>>> {
    let month = MonthRange::parse(&params.month)?;
    let variance = compute_hour_variance(&state.record_store(), project_id, month).await?;
    Ok(Json(DataResponse { data: variance }))
}
