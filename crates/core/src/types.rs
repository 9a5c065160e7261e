/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Attendance is recorded per calendar day, without a time component.
pub type Date = chrono::NaiveDate;
