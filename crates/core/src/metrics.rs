//! Budget metric types and pure reduction logic.
//!
//! Everything here is arithmetic over already-fetched records. Fetching and
//! reference resolution live in [`crate::aggregator`].

use serde::Serialize;

use crate::kinds::{TransactionType, WorkLogType};
use crate::records::{TransactionEntry, WorkLogEntry};
use crate::types::{Amount, DbId};

/// Multiplier turning a fraction into a percentage.
pub const PERCENT: f64 = 100.0;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Financial summary for one project. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub project_id: DbId,
    pub budget: Amount,
    pub income: Amount,
    pub labor_cost: Amount,
    pub other_expense: Amount,
    /// `income - labor_cost - other_expense`. Negative when spending exceeds income.
    pub balance: Amount,
    /// Percentage of budget consumed. Not clamped: values above 100 signal overrun.
    pub budget_usage: f64,
}

/// Planned vs actual hours for one project in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourVariance {
    pub project_id: DbId,
    /// The month in `YYYY-MM` form.
    pub month: String,
    pub planned_hours: f64,
    pub actual_hours: f64,
    /// `actual_hours - planned_hours`. Positive means over plan.
    pub variance: f64,
}

/// Income and expense sums over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionTotals {
    pub income: Amount,
    pub other_expense: Amount,
}

/// Planned and actual hour sums over a set of work logs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourTotals {
    pub planned: f64,
    pub actual: f64,
}

impl HourTotals {
    pub fn variance(&self) -> f64 {
        self.actual - self.planned
    }
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// Split transaction amounts into income and expense totals.
pub fn sum_transactions<'a, I>(transactions: I) -> TransactionTotals
where
    I: IntoIterator<Item = &'a TransactionEntry>,
{
    transactions
        .into_iter()
        .fold(TransactionTotals::default(), |mut totals, t| {
            match t.transaction_type {
                TransactionType::Income => totals.income += t.amount,
                TransactionType::Expense => totals.other_expense += t.amount,
            }
            totals
        })
}

/// Sum `hours × hourly_rate` over already-resolved labor lines.
pub fn labor_cost<I>(lines: I) -> Amount
where
    I: IntoIterator<Item = (f64, Amount)>,
{
    lines.into_iter().map(|(hours, rate)| hours * rate).sum()
}

/// Partition work log hours by type.
pub fn sum_hours<'a, I>(logs: I) -> HourTotals
where
    I: IntoIterator<Item = &'a WorkLogEntry>,
{
    logs.into_iter().fold(HourTotals::default(), |mut totals, log| {
        match log.work_type {
            WorkLogType::Planned => totals.planned += log.hours,
            WorkLogType::Actual => totals.actual += log.hours,
        }
        totals
    })
}

/// `income - labor_cost - other_expense`.
pub fn balance(income: Amount, labor_cost: Amount, other_expense: Amount) -> Amount {
    income - labor_cost - other_expense
}

/// Share of the budget consumed by labor plus other expense, as a percentage.
///
/// A zero (or negative) budget yields 0 rather than dividing by zero.
pub fn budget_usage(budget: Amount, labor_cost: Amount, other_expense: Amount) -> f64 {
    if budget > 0.0 {
        (labor_cost + other_expense) / budget * PERCENT
    } else {
        0.0
    }
}

impl Dashboard {
    /// Assemble a dashboard from the project budget and the reduced totals.
    pub fn from_totals(
        project_id: DbId,
        budget: Amount,
        transactions: TransactionTotals,
        labor_cost: Amount,
    ) -> Self {
        let TransactionTotals {
            income,
            other_expense,
        } = transactions;
        Self {
            project_id,
            budget,
            income,
            labor_cost,
            other_expense,
            balance: balance(income, labor_cost, other_expense),
            budget_usage: budget_usage(budget, labor_cost, other_expense),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
