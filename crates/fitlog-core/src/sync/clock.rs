//! Timestamp parsing and watermark rendering
//!
//! All sync time values are Unix milliseconds internally and ISO-8601 UTC
//! strings on the wire. The server is the sole issuer of watermarks; client
//! wall-clock values only ever enter relative comparisons against stored
//! server timestamps, so device clock skew cannot move the cursor.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};

/// Parse an ISO-8601 timestamp into Unix milliseconds.
///
/// Accepts a trailing `Z`, an explicit numeric offset, or no offset at all
/// (interpreted as UTC), with optional fractional seconds.
pub fn parse_timestamp(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).timestamp_millis());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().timestamp_millis())
        .map_err(|_| Error::MalformedTimestamp(raw.to_string()))
}

/// Render Unix milliseconds as an ISO-8601 UTC string with a trailing `Z`
#[must_use]
pub fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current server time in Unix milliseconds
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
