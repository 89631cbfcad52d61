//! Handlers for the `/worklogs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use budget_core::error::CoreError;
use budget_core::types::DbId;
use budget_db::models::work_log::{CreateWorkLog, UpdateWorkLog, WorkLog};
use budget_db::repositories::WorkLogRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_engineer, ensure_project};
use crate::query::WorkLogQuery;
use crate::state::AppState;

/// POST /api/v1/worklogs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkLog>,
) -> AppResult<(StatusCode, Json<WorkLog>)> {
    input.check()?;
    ensure_project(&state.pool, input.project_id).await?;
    ensure_engineer(&state.pool, input.engineer_id).await?;
    let log = WorkLogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/worklogs?project_id=&month=YYYY-MM&work_type=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkLogQuery>,
) -> AppResult<Json<Vec<WorkLog>>> {
    let filter = params.to_filter()?;
    let logs = WorkLogRepo::list(&state.pool, &filter).await?;
    Ok(Json(logs))
}

/// GET /api/v1/worklogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkLog>> {
    let log = WorkLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkLog",
            id,
        }))?;
    Ok(Json(log))
}

/// PUT /api/v1/worklogs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkLog>,
) -> AppResult<Json<WorkLog>> {
    input.check()?;
    if let Some(project_id) = input.project_id {
        ensure_project(&state.pool, project_id).await?;
    }
    if let Some(engineer_id) = input.engineer_id {
        ensure_engineer(&state.pool, engineer_id).await?;
    }
    let log = WorkLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkLog",
            id,
        }))?;
    Ok(Json(log))
}

/// DELETE /api/v1/worklogs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if WorkLogRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorkLog",
            id,
        }))
    }
}
