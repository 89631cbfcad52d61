//! Shared query parameter types for API handlers.

use budget_core::error::CoreError;
use budget_core::kinds::WorkLogType;
use budget_core::month::MonthRange;
use budget_core::types::DbId;
use budget_db::models::work_log::WorkLogListFilter;
use serde::Deserialize;

/// Query parameters for `GET /worklogs` (`?project_id=&month=YYYY-MM&work_type=ACTUAL`).
#[derive(Debug, Default, Deserialize)]
pub struct WorkLogQuery {
    pub project_id: Option<DbId>,
    pub month: Option<String>,
    pub work_type: Option<WorkLogType>,
}

impl WorkLogQuery {
    /// Parse the raw parameters into a repository filter.
    pub fn to_filter(&self) -> Result<WorkLogListFilter, CoreError> {
        Ok(WorkLogListFilter {
            project_id: self.project_id,
            month: self.month.as_deref().map(MonthRange::parse).transpose()?,
            work_type: self.work_type,
        })
    }
}

/// Query parameters for `GET /transactions` (`?project_id=`).
#[derive(Debug, Default, Deserialize)]
pub struct TransactionQuery {
    pub project_id: Option<DbId>,
}

/// Query parameters for `GET /dashboard/{project_id}/hours` (`?month=YYYY-MM`).
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: String,
}
