//! Date normalisation for `ADD_DATE` values.
//!
//! Most exports write seconds since the epoch, but some write milliseconds or
//! microseconds, which land tens of thousands of years in the future. Those
//! are recovered by dropping trailing digits until the date falls within the
//! configured range. Anything that is not an epoch is tried against a handful
//! of common date formats before giving up and using the current time.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y", "%b %d, %Y"];

/// How a raw date string should be interpreted.
#[derive(Debug, Clone, Copy)]
pub struct DatePolicy {
    /// Trim over-long epochs back into range.
    pub normalize: bool,
    /// Latest acceptable instant, as a Unix timestamp.
    pub ceiling: i64,
    /// Returned when nothing else applies.
    pub now: i64,
}

/// Parse a raw `ADD_DATE` value into a Unix timestamp.
pub fn parse_date(raw: &str, policy: &DatePolicy) -> i64 {
    let raw = raw.trim();

    if is_epoch(raw) {
        let parsed = if policy.normalize {
            normalize_epoch(raw, policy.ceiling)
        } else {
            raw.parse::<i64>().ok()
        };
        return parsed.unwrap_or(policy.now);
    }

    parse_free_form(raw).unwrap_or(policy.now)
}

/// Drop trailing digits from `epoch` until it is no later than `ceiling`.
///
/// Returns `None` only when no prefix parses, which cannot happen for a string
/// of digits with an optional leading minus sign.
pub fn normalize_epoch(epoch: &str, ceiling: i64) -> Option<i64> {
    let mut digits = epoch;
    while !digits.is_empty() && digits != "-" {
        if let Ok(secs) = digits.parse::<i64>() {
            if secs <= ceiling {
                if digits.len() != epoch.len() {
                    tracing::trace!(original = epoch, normalized = secs, "trimmed over-long epoch");
                }
                return Some(secs);
            }
        }
        let cut = digits.char_indices().next_back().map_or(0, |(i, _)| i);
        digits = &digits[..cut];
    }
    None
}

/// Best-effort parse of common date and date-time notations, read as UTC.
pub fn parse_free_form(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().timestamp())
}

fn is_epoch(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
