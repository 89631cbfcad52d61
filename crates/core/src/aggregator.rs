//! Budget metrics aggregation over a [`RecordStore`].
//!
//! [`compute_dashboard`] and [`compute_hour_variance`] read the current state
//! of a project's records and reduce them with [`crate::metrics`]. They hold
//! no state between calls and never write, so concurrent calls for the same
//! or different projects need no coordination.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::metrics::{self, Dashboard, HourVariance};
use crate::month::MonthRange;
use crate::records::{EngineerRate, ProjectBudget, TransactionEntry, WorkLogEntry, WorkLogFilter};
use crate::types::{Amount, DbId};

// ---------------------------------------------------------------------------
// Store contract
// ---------------------------------------------------------------------------

/// Read access to the records that budget metrics are derived from.
///
/// `get_project` and `get_engineer` return [`CoreError::NotFound`] for ids
/// that do not resolve (including soft-deleted rows). Any other failure is
/// reported as [`CoreError::Internal`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_project(&self, id: DbId) -> Result<ProjectBudget, CoreError>;

    /// All transactions for a project, any date.
    async fn list_transactions(&self, project_id: DbId)
        -> Result<Vec<TransactionEntry>, CoreError>;

    /// Work logs for a project. Only entries satisfying `filter` are returned;
    /// callers reduce the result without re-checking it.
    async fn list_work_logs(
        &self,
        project_id: DbId,
        filter: &WorkLogFilter,
    ) -> Result<Vec<WorkLogEntry>, CoreError>;

    async fn get_engineer(&self, id: DbId) -> Result<EngineerRate, CoreError>;
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Compute the financial summary for a project.
///
/// Fails with [`CoreError::NotFound`] when the project does not exist and
/// with [`CoreError::DanglingReference`] when an ACTUAL work log points at
/// an engineer that no longer resolves. No partial totals are returned.
pub async fn compute_dashboard<S>(store: &S, project_id: DbId) -> Result<Dashboard, CoreError>
where
    S: RecordStore + ?Sized,
{
    let project = store.get_project(project_id).await?;

    let transactions = store.list_transactions(project_id).await?;
    let totals = metrics::sum_transactions(&transactions);

    let logs = store
        .list_work_logs(project_id, &WorkLogFilter::actual_only())
        .await?;

    // Rates are read once per engineer per call, never cached across calls.
    let mut rates: HashMap<DbId, Amount> = HashMap::new();
    let mut lines = Vec::with_capacity(logs.len());
    for log in &logs {
        let rate = match rates.get(&log.engineer_id) {
            Some(rate) => *rate,
            None => {
                let rate = resolve_rate(store, log).await?;
                rates.insert(log.engineer_id, rate);
                rate
            }
        };
        lines.push((log.hours, rate));
    }
    let labor_cost = metrics::labor_cost(lines);

    let dashboard = Dashboard::from_totals(project.id, project.budget, totals, labor_cost);
    tracing::debug!(
        project_id,
        transactions = transactions.len(),
        actual_logs = logs.len(),
        income = dashboard.income,
        labor_cost = dashboard.labor_cost,
        other_expense = dashboard.other_expense,
        budget_usage = dashboard.budget_usage,
        "Computed project dashboard"
    );
    Ok(dashboard)
}

/// Look up the engineer behind a work log, turning a miss into a dangling reference.
async fn resolve_rate<S>(store: &S, log: &WorkLogEntry) -> Result<Amount, CoreError>
where
    S: RecordStore + ?Sized,
{
    match store.get_engineer(log.engineer_id).await {
        Ok(engineer) => Ok(engineer.hourly_rate),
        Err(CoreError::NotFound { .. }) => {
            tracing::warn!(
                work_log_id = log.id,
                engineer_id = log.engineer_id,
                "Work log references a missing engineer"
            );
            Err(CoreError::DanglingReference {
                entity: "Engineer",
                id: log.engineer_id,
                referenced_by: "WorkLog",
                referrer_id: log.id,
            })
        }
        Err(other) => Err(other),
    }
}

// ---------------------------------------------------------------------------
// Work-hour variance
// ---------------------------------------------------------------------------

/// Compare planned and actual hours logged against a project in one month.
pub async fn compute_hour_variance<S>(
    store: &S,
    project_id: DbId,
    month: MonthRange,
) -> Result<HourVariance, CoreError>
where
    S: RecordStore + ?Sized,
{
    let project = store.get_project(project_id).await?;

    let filter = WorkLogFilter::in_month(month);
    let logs = store.list_work_logs(project.id, &filter).await?;
    let totals = metrics::sum_hours(&logs);

    Ok(HourVariance {
        project_id: project.id,
        month: month.to_string(),
        planned_hours: totals.planned,
        actual_hours: totals.actual,
        variance: totals.variance(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
