/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All row audit timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Order workflow dates are day-granular calendar dates.
pub type Date = chrono::NaiveDate;
