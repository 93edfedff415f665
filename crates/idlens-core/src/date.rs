//! Best-effort conversion of model-reported dates to `DD-MM-YYYY`.
//!
//! Policy, in order:
//!
//! 1. Empty input stays empty.
//! 2. Input already shaped `DD-MM-YYYY` is returned unchanged.
//! 3. `/` separators are rewritten to `-` and the shape is checked again.
//! 4. A generic calendar parse is attempted and the result reformatted.
//! 5. Anything else is returned unchanged.
//!
//! Step 4 reads bare numeric dates month-first (`6/15/1990` is 15 June), the
//! way generic date parsers do. A day-first date with single-digit parts such
//! as `5/6/1990` is therefore read as 6 May. This ambiguity is kept as is.
//!
//! A month with a year and no day (`June 1990`) is the first of that month.
//! Two-digit years go through chrono's `%y` century pivot (`90` is 1990, `05`
//! is 2005). Four-digit layouts must yield a four-digit year, since chrono's
//! `%Y` also accepts `90` as year 90.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Output format.
pub const CANONICAL_DATE_FORMAT: &str = "%d-%m-%Y";

static CANONICAL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("static regex"));

/// Date-only layouts tried by the generic parse, in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d-%b-%Y",
    "%d %b, %Y",
];

/// Day-less layouts, parsed as the first of the month.
const MONTH_YEAR_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y"];

/// Layouts with a two-digit year, tried last.
const SHORT_YEAR_FORMATS: &[&str] = &["%m/%d/%y", "%m-%d-%y", "%d %B %y", "%d %b %y", "%d-%b-%y"];

/// Timestamp layouts without an offset.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalise a date string to `DD-MM-YYYY`. Never fails.
pub fn normalize_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if is_canonical(input) {
        return input.to_string();
    }

    let dashed = input.replace('/', "-");
    if is_canonical(&dashed) {
        return dashed;
    }

    match parse_calendar_date(input) {
        Some(date) => date.format(CANONICAL_DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// True when `s` has the `DD-MM-YYYY` shape. Digit ranges are not checked.
pub fn is_canonical(s: &str) -> bool {
    CANONICAL_SHAPE.is_match(s)
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive()).filter(has_full_year);
    }

    let full_year = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .filter(has_full_year)
        .or_else(|| first_full_year(s, DATE_FORMATS))
        .or_else(|| first_full_year(&format!("1 {s}"), MONTH_YEAR_FORMATS));
    if full_year.is_some() {
        return full_year;
    }

    SHORT_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn first_full_year(s: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok().filter(has_full_year))
}

fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= 1000
}
