//! Date normalization for résumé date ranges.
//!
//! JSON Resume dates are ISO-8601-ish strings of varying precision
//! (`2021`, `2021-06`, `2021-06-01`, full date-times), though hand-written
//! files also contain `2021/06/01` or `June 2021`. The renderers only ever
//! display the year, so this module reduces a date to its year or to a
//! caller-chosen fallback label.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Fallback for a missing end date.
pub const PRESENT: &str = "Present";

/// Fallback for a publication release date that does not parse.
pub const NO_DATE: &str = "n.d.";

/// Returns the four-digit year of `value`, or `fallback` when the value is
/// absent, empty, or not a recognizable date.
///
/// # Examples
///
/// ```rust
/// use cvgen::dates::format_date;
///
/// assert_eq!(format_date(Some("2021-06-01"), "Present"), "2021");
/// assert_eq!(format_date(Some("not-a-date"), "Present"), "Present");
/// assert_eq!(format_date(None, ""), "");
/// ```
pub fn format_date(value: Option<&str>, fallback: &str) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return fallback.to_string();
    };

    match parse_year(raw.trim()) {
        Some(year) => year.to_string(),
        None => {
            tracing::debug!(value = raw, fallback, "unparseable date, using fallback");
            fallback.to_string()
        }
    }
}

/// Formats a `start--end` range. Start falls back to empty, end to "Present".
pub fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("{}--{}", format_date(start, ""), format_date(end, PRESENT))
}

fn parse_year(value: &str) -> Option<i32> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.year());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.year());
        }
    }

    numeric_year(value).or_else(|| month_name_year(value))
}

/// Parses `YYYY`, `YYYY-M[M]`, `YYYY-M[M]-D[D]` and the same with `/`.
///
/// The day is only range-checked (1..=31), not validated against the month.
fn numeric_year(value: &str) -> Option<i32> {
    let separator = if value.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = value.split(separator).collect();
    let (year, rest) = parts.split_first()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) || rest.len() > 2 {
        return None;
    }
    for (part, max) in rest.iter().zip([12u32, 31]) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: u32 = part.parse().ok()?;
        if n == 0 || n > max {
            return None;
        }
    }
    year.parse().ok()
}

/// Parses `<month name> YYYY`, e.g. `Jan 2019` or `March 2020`.
fn month_name_year(value: &str) -> Option<i32> {
    let dated = format!("1 {value}");
    ["%d %b %Y", "%d %B %Y"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&dated, fmt).ok())
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_uses_fallback() {
        assert_eq!(format_date(None, "Present"), "Present");
        assert_eq!(format_date(Some(""), "Present"), "Present");
        assert_eq!(format_date(None, NO_DATE), "n.d.");
        assert_eq!(format_date(None, ""), "");
    }

    #[test]
    fn test_full_dates() {
        assert_eq!(format_date(Some("2021-06-01"), PRESENT), "2021");
        assert_eq!(format_date(Some(" 1999-12-31 "), PRESENT), "1999");
    }

    #[test]
    fn test_reduced_precision() {
        assert_eq!(format_date(Some("2018-03"), PRESENT), "2018");
        assert_eq!(format_date(Some("2018"), PRESENT), "2018");
        assert_eq!(format_date(Some("2019-1"), PRESENT), "2019");
    }

    #[test]
    fn test_slash_separated() {
        assert_eq!(format_date(Some("2019/05/01"), PRESENT), "2019");
        assert_eq!(format_date(Some("2019/5"), PRESENT), "2019");
        assert_eq!(format_date(Some("2019/13"), PRESENT), "Present");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(format_date(Some("Jan 2019"), PRESENT), "2019");
        assert_eq!(format_date(Some("March 2020"), PRESENT), "2020");
        assert_eq!(format_date(Some("Smarch 2020"), PRESENT), "Present");
    }

    #[test]
    fn test_day_is_not_validated_against_month() {
        assert_eq!(format_date(Some("2021-02-30"), PRESENT), "2021");
        assert_eq!(format_date(Some("2021-02-32"), PRESENT), "Present");
    }

    #[test]
    fn test_date_times() {
        assert_eq!(format_date(Some("2020-05-04T10:00:00Z"), PRESENT), "2020");
        assert_eq!(format_date(Some("2020-05-04T10:00:00+10:00"), PRESENT), "2020");
        assert_eq!(format_date(Some("2020-05-04T10:00"), PRESENT), "2020");
    }

    #[test]
    fn test_invalid_dates_use_fallback() {
        assert_eq!(format_date(Some("not-a-date"), PRESENT), "Present");
        assert_eq!(format_date(Some("2021-13-01"), PRESENT), "Present");
        assert_eq!(format_date(Some("0"), PRESENT), "Present");
        assert_eq!(format_date(Some("soon"), NO_DATE), "n.d.");
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range(Some("2015-01-01"), Some("2019-06-30")), "2015--2019");
        assert_eq!(date_range(Some("2015-01-01"), None), "2015--Present");
        assert_eq!(date_range(None, Some("2019")), "--2019");
        assert_eq!(date_range(None, None), "--Present");
    }
}
