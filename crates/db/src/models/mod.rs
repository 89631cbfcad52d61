//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

use budget_core::error::CoreError;
use validator::ValidationErrors;

pub mod engineer;
pub mod project;
pub mod transaction;
pub mod work_log;

/// Flatten `validator` field errors into a single domain validation error.
pub(crate) fn field_errors(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{field} ({})", codes.join(", "))
        })
        .collect();
    fields.sort();
    CoreError::Validation(format!("invalid fields: {}", fields.join("; ")))
}
