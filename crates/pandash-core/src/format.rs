//! Text and date formatting shared by command handlers.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static pattern compiles"));

/// Remove inline HTML tags.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Shown in place of a content date that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a content date as `5 Jan 2024`; a missing date is `Present`.
///
/// Accepts ISO dates and datetimes (with or without an offset), `YYYY/MM/DD`,
/// `MM/DD/YYYY`, month-name forms such as `Jan 5, 2024` or `March 2024`, and
/// `YYYY-MM` or `YYYY`. Anything else renders as [`INVALID_DATE`].
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "Present".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    // Month or year precision: pin to the first day
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %B %Y") {
        return Some(date);
    }
    let mut parts = raw.splitn(2, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Timestamp column of `ls -l`: `Oct 18, 03:04 PM`.
pub fn listing_timestamp(now: NaiveDateTime) -> String {
    now.format("%b %d, %I:%M %p").to_string()
}

/// `date` output: `Sun Oct 18 2026 15:04:05`.
pub fn long_date(now: NaiveDateTime) -> String {
    now.format("%a %b %d %Y %H:%M:%S").to_string()
}
