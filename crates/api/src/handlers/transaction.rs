//! Handlers for the `/transactions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use budget_core::error::CoreError;
use budget_core::types::DbId;
use budget_db::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use budget_db::repositories::TransactionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::query::TransactionQuery;
use crate::state::AppState;

/// POST /api/v1/transactions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    input.check()?;
    ensure_project(&state.pool, input.project_id).await?;
    let transaction = TransactionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/v1/transactions?project_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TransactionQuery>,
) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = TransactionRepo::list(&state.pool, params.project_id).await?;
    Ok(Json(transactions))
}

/// GET /api/v1/transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Transaction>> {
    let transaction = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;
    Ok(Json(transaction))
}

/// PUT /api/v1/transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTransaction>,
) -> AppResult<Json<Transaction>> {
    input.check()?;
    if let Some(project_id) = input.project_id {
        ensure_project(&state.pool, project_id).await?;
    }
    let transaction = TransactionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;
    Ok(Json(transaction))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TransactionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))
    }
}
