//! Classification enums mapping to SMALLINT lookup tables.
//!
//! Each variant's discriminant matches the seed row id in the corresponding
//! `*_types` table, so rows store the id and the core works with the enum.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lookup id type matching SMALLINT in the database.
pub type KindId = i16;

macro_rules! define_kind_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database lookup ID.
            pub fn id(self) -> KindId {
                self as KindId
            }

            /// Resolve a lookup ID, rejecting values with no seeded row.
            pub fn from_id(id: KindId) -> Result<Self, CoreError> {
                match id {
                    $( x if x == $val => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "unknown {} id {other}",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl From<$name> for KindId {
            fn from(value: $name) -> Self {
                value as KindId
            }
        }

        impl TryFrom<KindId> for $name {
            type Error = CoreError;

            fn try_from(id: KindId) -> Result<Self, Self::Error> {
                Self::from_id(id)
            }
        }
    };
}

define_kind_enum! {
    /// Whether a work log is a forecast or billable realized hours.
    WorkLogType {
        Planned = 1,
        Actual = 2,
    }
}

define_kind_enum! {
    /// Direction of a transaction. Amounts are unsigned; the sign comes from here.
    TransactionType {
        Income = 1,
        Expense = 2,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ids_match_seed_rows() {
        assert_eq!(WorkLogType::Planned.id(), 1);
        assert_eq!(WorkLogType::Actual.id(), 2);
        assert_eq!(TransactionType::Income.id(), 1);
        assert_eq!(TransactionType::Expense.id(), 2);
    }

    #[test]
    fn from_id_round_trips_known_ids() {
        assert_eq!(WorkLogType::from_id(2).unwrap(), WorkLogType::Actual);
        assert_eq!(TransactionType::try_from(1).unwrap(), TransactionType::Income);
    }

    #[test]
    fn from_id_rejects_unknown() {
        assert_matches!(WorkLogType::from_id(0), Err(CoreError::Validation(_)));
        assert_matches!(TransactionType::from_id(3), Err(CoreError::Validation(_)));
    }

    #[test]
    fn serializes_as_screaming_case() {
        assert_eq!(
            serde_json::to_string(&WorkLogType::Planned).unwrap(),
            "\"PLANNED\""
        );
        let parsed: TransactionType = serde_json::from_str("\"EXPENSE\"").unwrap();
        assert_eq!(parsed, TransactionType::Expense);
    }
}
