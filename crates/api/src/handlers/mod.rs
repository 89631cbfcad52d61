pub mod dashboard;
pub mod engineer;
pub mod project;
pub mod transaction;
pub mod work_log;

use budget_core::error::CoreError;
use budget_core::types::DbId;
use budget_db::repositories::{EngineerRepo, ProjectRepo};
use budget_db::DbPool;

use crate::error::{AppError, AppResult};

/// Fail with 404 unless a live project with `id` exists.
pub(crate) async fn ensure_project(pool: &DbPool, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Fail with 404 unless a live engineer with `id` exists.
pub(crate) async fn ensure_engineer(pool: &DbPool, id: DbId) -> AppResult<()> {
    EngineerRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Engineer",
            id,
        }))
}
