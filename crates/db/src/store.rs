//! PostgreSQL-backed [`RecordStore`] used by the metrics aggregator.

use async_trait::async_trait;
use budget_core::aggregator::RecordStore;
use budget_core::error::CoreError;
use budget_core::records::{
    EngineerRate, ProjectBudget, TransactionEntry, WorkLogEntry, WorkLogFilter,
};
use budget_core::types::DbId;

use crate::models::transaction::Transaction;
use crate::models::work_log::{WorkLog, WorkLogListFilter};
use crate::repositories::{EngineerRepo, ProjectRepo, TransactionRepo, WorkLogRepo};
use crate::DbPool;

/// Serves budget reads straight from the repositories. Holds only a pool
/// handle, so it is cheap to build per request.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a storage failure and hide its details behind `CoreError::Internal`.
fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Record store query failed");
    CoreError::Internal(format!("record store query failed: {err}"))
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn get_project(&self, id: DbId) -> Result<ProjectBudget, CoreError> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .map(|p| ProjectBudget::from(&p))
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn list_transactions(
        &self,
        project_id: DbId,
    ) -> Result<Vec<TransactionEntry>, CoreError> {
        TransactionRepo::list(&self.pool, Some(project_id))
            .await
            .map(|rows| rows.iter().map(Transaction::to_entry).collect())
            .map_err(internal)
    }

    async fn list_work_logs(
        &self,
        project_id: DbId,
        filter: &WorkLogFilter,
    ) -> Result<Vec<WorkLogEntry>, CoreError> {
        let list_filter = WorkLogListFilter {
            project_id: Some(project_id),
            month: filter.month,
            work_type: filter.work_type,
        };
        WorkLogRepo::list(&self.pool, &list_filter)
            .await
            .map(|rows| rows.iter().map(WorkLog::to_entry).collect())
            .map_err(internal)
    }

    async fn get_engineer(&self, id: DbId) -> Result<EngineerRate, CoreError> {
        EngineerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .map(|e| EngineerRate::from(&e))
            .ok_or(CoreError::NotFound {
                entity: "Engineer",
                id,
            })
    }
}
