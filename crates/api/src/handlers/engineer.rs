//! Handlers for the `/engineers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use budget_core::error::CoreError;
use budget_core::types::DbId;
use budget_db::models::engineer::{CreateEngineer, Engineer, UpdateEngineer};
use budget_db::repositories::EngineerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/engineers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEngineer>,
) -> AppResult<(StatusCode, Json<Engineer>)> {
    input.check()?;
    let engineer = EngineerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(engineer)))
}

/// GET /api/v1/engineers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Engineer>>> {
    let engineers = EngineerRepo::list(&state.pool).await?;
    Ok(Json(engineers))
}

/// GET /api/v1/engineers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Engineer>> {
    let engineer = EngineerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Engineer",
            id,
        }))?;
    Ok(Json(engineer))
}

/// PUT /api/v1/engineers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEngineer>,
) -> AppResult<Json<Engineer>> {
    input.check()?;
    let engineer = EngineerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Engineer",
            id,
        }))?;
    Ok(Json(engineer))
}

/// DELETE /api/v1/engineers/{id}
///
/// Soft delete only. Work logs that reference the engineer are kept.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EngineerRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(engineer_id = id, "Engineer soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Engineer",
            id,
        }))
    }
}
