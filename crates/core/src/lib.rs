//! Domain types and pure budget logic.
//!
//! Nothing in this crate touches the database directly. Storage is reached
//! through the [`aggregator::RecordStore`] trait, which `budget-db` implements.

pub mod aggregator;
pub mod error;
pub mod kinds;
pub mod metrics;
pub mod month;
pub mod records;
pub mod types;
pub mod validation;
