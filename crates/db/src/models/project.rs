//! Project entity model and DTOs.

use budget_core::error::CoreError;
use budget_core::records::ProjectBudget;
use budget_core::types::{Amount, BusinessDate, DbId, Timestamp};
use budget_core::validation::{validate_date_range, validate_non_negative, validate_required_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::field_errors;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub budget: Amount,
    pub start_date: BusinessDate,
    pub end_date: Option<BusinessDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Project> for ProjectBudget {
    fn from(project: &Project) -> Self {
        ProjectBudget {
            id: project.id,
            budget: project.budget,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub budget: Amount,
    pub start_date: BusinessDate,
    pub end_date: Option<BusinessDate>,
}

impl CreateProject {
    /// Run field checks plus the cross-field date rule.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        validate_required_text(&self.name, "name")?;
        validate_non_negative(self.budget, "budget")?;
        validate_date_range(self.start_date, self.end_date)
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub budget: Option<Amount>,
    pub start_date: Option<BusinessDate>,
    pub end_date: Option<BusinessDate>,
    /// Set to `true` to remove an existing end date (ignored when `end_date` is given).
    #[serde(default)]
    pub clear_end_date: bool,
}

impl UpdateProject {
    /// Validate the supplied fields. Ranges that span stored values are
    /// enforced by the `ck_projects_date_range` constraint.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        if let Some(name) = &self.name {
            validate_required_text(name, "name")?;
        }
        if let Some(budget) = self.budget {
            validate_non_negative(budget, "budget")?;
        }
        if let Some(start) = self.start_date {
            validate_date_range(start, self.end_date)?;
        }
        Ok(())
    }
}
