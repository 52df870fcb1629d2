use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;

use super::error::PreviewError;

/// Stand-in rendered when the `seasons` attribute is missing entirely.
pub const ABSENT_VALUE: &str = "null";
/// Text rendered after "Updated: " when `last-updated` can't be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const UPDATED_PREFIX: &str = "Updated: ";
// en-US long form, e.g. "November 3, 2022"
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Builds the one-line metadata text, e.g. "1 season" or "4 seasons".
///
/// The value is shown exactly as given. Only the pluralization looks at the
/// number, and anything that doesn't parse to exactly 1 is plural.
pub fn season_label(seasons: Option<&str>) -> String {
    let shown = seasons.unwrap_or(ABSENT_VALUE);
    let suffix = if parse_leading_int(shown) == Some(1) { "" } else { "s" };
    format!("{} season{}", shown, suffix)
}

/// Best-effort integer parse: leading whitespace, an optional sign, then the
/// leading run of ASCII digits. Trailing garbage is ignored.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value = rest[..digits_end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Splits the comma-separated `genres` attribute into trimmed tag labels.
pub fn genre_tags(genres: Option<&str>) -> Vec<String> {
    match genres {
        Some(raw) if !raw.trim().is_empty() => {
            raw.split(',').map(|genre| genre.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

/// Formats `last-updated` as "Updated: November 3, 2022".
///
/// Absent or blank input renders nothing. Input that isn't an ISO-8601 date
/// renders "Updated: Invalid Date" so the bad value is visible on the card.
pub fn updated_label(last_updated: Option<&str>) -> String {
    let raw = match last_updated {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return String::new(),
    };

    match parse_last_updated(raw) {
        Ok(date) => format!("{}{}", UPDATED_PREFIX, date.format(LONG_DATE_FORMAT)),
        Err(e) => {
            warn!("{}", e);
            format!("{}{}", UPDATED_PREFIX, INVALID_DATE)
        }
    }
}

/// Parses the ISO-8601 shapes a feed is likely to carry into the calendar
/// date as written. Offsets are not converted to local time.
pub fn parse_last_updated(raw: &str) -> Result<NaiveDate, PreviewError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    // RFC 3339 needs seconds; ISO-8601 also allows "T07:00Z" and "T07:00+02:00"
    let zoned = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(local) => format!("{}+00:00", local),
        None => s.to_string(),
    };
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Ok(dt.date_naive());
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    let bytes = s.as_bytes();
    if bytes.len() == 7 && bytes[4] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
            return Ok(date);
        }
    }

    if bytes.len() == 4 && bytes.iter().all(u8::is_ascii_digit) {
        if let Some(date) = s.parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)) {
            return Ok(date);
        }
    }

    Err(PreviewError::InvalidDate(raw.to_string()))
}
