//! SEED ordinal date encoding.
//!
//! Converts ISO-8601 calendar timestamps into the `YYYY,DDD,<time>` form
//! used by SYNC lines. Only the date part is converted; the clock time is
//! copied verbatim with any trailing `Z` removed.

use crate::constants::{ISO_DATE_FORMAT, SEED_DATE_FORMAT};
use crate::error::{Result, SyncError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Format a date as SEED `YYYY,DDD`
pub fn seed_date(date: NaiveDate) -> String {
    date.format(SEED_DATE_FORMAT).to_string()
}

/// Re-encode `<date>T<time>` as `<year>,<day-of-year>,<time>`
pub fn seed_datetime(value: &str) -> Result<String> {
    let (date_part, time_part) = split_timestamp(value)?;

    // Four-digit year, zero-padded month and day, no sign or padding
    if !ISO_DATE_PATTERN.is_match(date_part) {
        return Err(SyncError::InvalidTimestamp {
            value: value.to_string(),
            reason: format!("date '{}' is not in YYYY-MM-DD form", date_part),
        });
    }

    let date = NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT).map_err(|source| {
        SyncError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })?;

    Ok(format!(
        "{},{}",
        seed_date(date),
        time_part.trim_matches('Z')
    ))
}

/// Split on the single `T` separator
fn split_timestamp(value: &str) -> Result<(&str, &str)> {
    let mut parts = value.split('T');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), None) => Ok((date, time)),
        _ => Err(SyncError::InvalidTimestamp {
            value: value.to_string(),
            reason: format!(
                "expected exactly one 'T' separator, found {}",
                value.matches('T').count()
            ),
        }),
    }
}
