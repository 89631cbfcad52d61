//! Domain validation rules shared by the create/update paths.
//!
//! Field-level shape checks (non-empty strings, non-negative numbers) run
//! first via `validator` derives on the DTOs; these helpers enforce the
//! rules those derives cannot express.

use crate::error::CoreError;
use crate::types::BusinessDate;

/// Reject empty or whitespace-only text.
pub fn validate_required_text(value: &str, name: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Reject negative, NaN, and infinite quantities (amounts, rates, hours).
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number >= 0, got {value}"
        )));
    }
    Ok(())
}

/// An optional end date must not precede the start date.
pub fn validate_date_range(
    start: BusinessDate,
    end: Option<BusinessDate>,
) -> Result<(), CoreError> {
    match end {
        Some(end) if end < start => Err(CoreError::Validation(format!(
            "end_date {end} is before start_date {start}"
        ))),
        _ => Ok(()),
    }
}
