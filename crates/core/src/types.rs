/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date for business records (project start, work log date, ...).
pub type BusinessDate = chrono::NaiveDate;

/// Monetary amount in the project's single currency.
pub type Amount = f64;
