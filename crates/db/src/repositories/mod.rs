//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod engineer_repo;
pub mod project_repo;
pub mod transaction_repo;
pub mod work_log_repo;

pub use engineer_repo::EngineerRepo;
pub use project_repo::ProjectRepo;
pub use transaction_repo::TransactionRepo;
pub use work_log_repo::WorkLogRepo;
