//! Narrow read views of stored records.
//!
//! These carry only the fields budget derivation reads. The full row types
//! live in `budget-db`, which converts into these when serving a
//! [`RecordStore`](crate::aggregator::RecordStore).

use crate::kinds::{TransactionType, WorkLogType};
use crate::month::MonthRange;
use crate::types::{Amount, BusinessDate, DbId};

/// A project's identity and budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBudget {
    pub id: DbId,
    pub budget: Amount,
}

/// An engineer's current hourly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineerRate {
    pub id: DbId,
    pub hourly_rate: Amount,
}

/// One income or expense line.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEntry {
    pub id: DbId,
    pub transaction_type: TransactionType,
    pub amount: Amount,
}

/// One work log line. The rate is resolved separately through the engineer.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLogEntry {
    pub id: DbId,
    pub engineer_id: DbId,
    pub work_type: WorkLogType,
    pub hours: f64,
    pub date: BusinessDate,
}

/// Optional narrowing applied when listing a project's work logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkLogFilter {
    pub work_type: Option<WorkLogType>,
    pub month: Option<MonthRange>,
}

impl WorkLogFilter {
    /// Only ACTUAL (billable) entries, any month.
    pub fn actual_only() -> Self {
        Self {
            work_type: Some(WorkLogType::Actual),
            month: None,
        }
    }

    /// All entry types within one month.
    pub fn in_month(month: MonthRange) -> Self {
        Self {
            work_type: None,
            month: Some(month),
        }
    }

    /// Whether an entry passes this filter.
    pub fn matches(&self, entry: &WorkLogEntry) -> bool {
        self.work_type.map_or(true, |t| t == entry.work_type)
            && self.month.map_or(true, |m| m.contains(entry.date))
    }
}
