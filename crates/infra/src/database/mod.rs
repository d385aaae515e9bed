//! SQLite persistence layer.

mod interview_repository;
mod manager;
mod token_repository;

pub use interview_repository::SqliteInterviewRepository;
pub use manager::{DbConnection, DbManager};
pub use token_repository::SqliteTokenRepository;

use chrono::{DateTime, Utc};

/// Convert a unix-second column value back into a UTC timestamp.
///
/// Values that fall outside the representable range are reported as a
/// conversion failure on the originating column.
pub(crate) fn datetime_from_ts(column: usize, ts: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(column, ts))
}
