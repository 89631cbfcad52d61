//! Engineer entity model and DTOs.

use budget_core::error::CoreError;
use budget_core::records::EngineerRate;
use budget_core::types::{Amount, DbId, Timestamp};
use budget_core::validation::{validate_non_negative, validate_required_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::field_errors;

/// An engineer row from the `engineers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Engineer {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub hourly_rate: Amount,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Engineer> for EngineerRate {
    fn from(engineer: &Engineer) -> Self {
        EngineerRate {
            id: engineer.id,
            hourly_rate: engineer.hourly_rate,
        }
    }
}

/// DTO for creating a new engineer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEngineer {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(range(min = 0.0))]
    pub hourly_rate: Amount,
}

impl CreateEngineer {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        validate_required_text(&self.name, "name")?;
        validate_required_text(&self.position, "position")?;
        validate_non_negative(self.hourly_rate, "hourly_rate")
    }
}

/// DTO for updating an existing engineer. All fields are optional.
///
/// A rate change applies to every existing work log at the next dashboard
/// computation; rates are never snapshotted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEngineer {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub position: Option<String>,
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<Amount>,
}

impl UpdateEngineer {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        if let Some(name) = &self.name {
            validate_required_text(name, "name")?;
        }
        if let Some(position) = &self.position {
            validate_required_text(position, "position")?;
        }
        if let Some(rate) = self.hourly_rate {
            validate_non_negative(rate, "hourly_rate")?;
        }
        Ok(())
    }
}
