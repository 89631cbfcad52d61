//! Work log entity model and DTOs.

use budget_core::error::CoreError;
use budget_core::kinds::{KindId, WorkLogType};
use budget_core::month::MonthRange;
use budget_core::records::WorkLogEntry;
use budget_core::types::{BusinessDate, DbId, Timestamp};
use budget_core::validation::validate_non_negative;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::field_errors;

/// A work log row from the `work_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkLog {
    pub id: DbId,
    pub engineer_id: DbId,
    pub project_id: DbId,
    pub hours: f64,
    pub date: BusinessDate,
    pub description: String,
    pub category: String,
    #[sqlx(rename = "work_type_id", try_from = "KindId")]
    pub work_type: WorkLogType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkLog {
    /// Narrow this row into the view used for budget derivation.
    pub fn to_entry(&self) -> WorkLogEntry {
        WorkLogEntry {
            id: self.id,
            engineer_id: self.engineer_id,
            work_type: self.work_type,
            hours: self.hours,
            date: self.date,
        }
    }
}

/// DTO for creating a new work log.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkLog {
    pub engineer_id: DbId,
    pub project_id: DbId,
    #[validate(range(min = 0.0))]
    pub hours: f64,
    pub date: BusinessDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// `"PLANNED"` or `"ACTUAL"`.
    pub work_type: WorkLogType,
}

impl CreateWorkLog {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        validate_non_negative(self.hours, "hours")
    }
}

/// DTO for updating an existing work log. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkLog {
    pub engineer_id: Option<DbId>,
    pub project_id: Option<DbId>,
    #[validate(range(min = 0.0))]
    pub hours: Option<f64>,
    pub date: Option<BusinessDate>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub work_type: Option<WorkLogType>,
}

impl UpdateWorkLog {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        match self.hours {
            Some(hours) => validate_non_negative(hours, "hours"),
            None => Ok(()),
        }
    }
}

/// Filter for listing work logs. Every field narrows when set.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkLogListFilter {
    pub project_id: Option<DbId>,
    pub month: Option<MonthRange>,
    pub work_type: Option<WorkLogType>,
}
