/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar days (week bounds, readiness log dates) carry no time zone.
pub type Day = chrono::NaiveDate;
