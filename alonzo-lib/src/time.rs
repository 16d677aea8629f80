//! Timestamp formatting for query parameters

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Render a datetime in the restricted RFC3339 form the API expects:
/// `YYYY-MM-DDTHH:MM:SSZ`, always UTC, second precision.
pub(crate) fn rfc3339(datetime: DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// The default lower bound of a transaction window: midnight UTC, one week
/// before the given day.
pub(crate) fn week_before(today: NaiveDate) -> DateTime<Utc> {
    (today - Duration::days(7)).and_time(NaiveTime::MIN).and_utc()
}
