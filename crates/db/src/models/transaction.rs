//! Transaction entity model and DTOs.

use budget_core::error::CoreError;
use budget_core::kinds::{KindId, TransactionType};
use budget_core::records::TransactionEntry;
use budget_core::types::{Amount, BusinessDate, DbId, Timestamp};
use budget_core::validation::validate_non_negative;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::field_errors;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub project_id: DbId,
    #[sqlx(rename = "transaction_type_id", try_from = "KindId")]
    pub transaction_type: TransactionType,
    /// Always non-negative. Direction comes from `transaction_type`.
    pub amount: Amount,
    pub category: String,
    pub date: BusinessDate,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Transaction {
    pub fn to_entry(&self) -> TransactionEntry {
        TransactionEntry {
            id: self.id,
            transaction_type: self.transaction_type,
            amount: self.amount,
        }
    }
}

/// DTO for creating a new transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransaction {
    pub project_id: DbId,
    /// `"INCOME"` or `"EXPENSE"`.
    pub transaction_type: TransactionType,
    #[validate(range(min = 0.0))]
    pub amount: Amount,
    #[serde(default)]
    pub category: String,
    pub date: BusinessDate,
    #[serde(default)]
    pub description: String,
}

impl CreateTransaction {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        validate_non_negative(self.amount, "amount")
    }
}

/// DTO for updating an existing transaction. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTransaction {
    pub project_id: Option<DbId>,
    pub transaction_type: Option<TransactionType>,
    #[validate(range(min = 0.0))]
    pub amount: Option<Amount>,
    pub category: Option<String>,
    pub date: Option<BusinessDate>,
    pub description: Option<String>,
}

impl UpdateTransaction {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(field_errors)?;
        match self.amount {
            Some(amount) => validate_non_negative(amount, "amount"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_type_is_optional_and_named() {
        let input: UpdateTransaction =
            serde_json::from_value(serde_json::json!({"transaction_type": "EXPENSE"})).unwrap();
        assert_eq!(input.transaction_type, Some(TransactionType::Expense));
        assert!(input.amount.is_none());

        let empty: UpdateTransaction = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.transaction_type.is_none());
        assert!(empty.check().is_ok());
    }

    #[test]
    fn update_rejects_negative_amount() {
        let input = UpdateTransaction {
            amount: Some(-0.01),
            ..Default::default()
        };
        assert!(input.check().is_err());
    }
}
