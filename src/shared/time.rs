//! Unix timestamp helpers.

use chrono::{DateTime, Utc};

/// Convert unix seconds to a UTC timestamp.
pub fn from_unix(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}
