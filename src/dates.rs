// src/dates.rs
//! Inclusive calendar date ranges and date formatting.

use chrono::NaiveDate;
use thiserror::Error;

/// Default textual date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date given either as text with an explicit format, or as an
/// already-resolved calendar date. Resolved once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSpec {
    Text { value: String, format: String },
    Calendar(NaiveDate),
}

/// Text that does not parse under its declared format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparsable date {value:?} with format {format:?}: {source}")]
pub struct DateSpecError {
    pub value: String,
    pub format: String,
    #[source]
    pub source: chrono::ParseError,
}

impl DateSpec {
    /// Text in the default `%Y-%m-%d` format.
    pub fn iso<S: Into<String>>(value: S) -> Self {
        DateSpec::Text {
            value: value.into(),
            format: DATE_FORMAT.to_owned(),
        }
    }

    /// Resolve to a concrete calendar date.
    pub fn resolve(&self) -> Result<NaiveDate, DateSpecError> {
        match self {
            DateSpec::Text { value, format } => NaiveDate::parse_from_str(value, format)
                .map_err(|source| DateSpecError {
                    value: value.clone(),
                    format: format.clone(),
                    source,
                }),
            DateSpec::Calendar(date) => Ok(*date),
        }
    }
}

impl From<NaiveDate> for DateSpec {
    fn from(date: NaiveDate) -> Self {
        DateSpec::Calendar(date)
    }
}

/// Every date from `from` to `to` inclusive, in one-day steps.
/// Empty when `from` is after `to`.
pub fn date_range(from: &DateSpec, to: &DateSpec) -> Result<Vec<NaiveDate>, DateSpecError> {
    let from = from.resolve()?;
    let to = to.resolve()?;

    let mut range = Vec::new();
    let mut cursor = from;
    while cursor <= to {
        range.push(cursor);
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    Ok(range)
}

/// Render `spec` with a chrono format pattern.
pub fn format_date(spec: &DateSpec, pattern: &str) -> Result<String, DateSpecError> {
    Ok(spec.resolve()?.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_is_inclusive_both_ends() {
        let range =
            date_range(&DateSpec::iso("2020-02-27"), &DateSpec::iso("2020-03-01")).unwrap();
        assert_eq!(
            range,
            vec![d(2020, 2, 27), d(2020, 2, 28), d(2020, 2, 29), d(2020, 3, 1)]
        );
    }

    #[test]
    fn single_day_range() {
        let range =
            date_range(&DateSpec::from(d(2021, 6, 1)), &DateSpec::from(d(2021, 6, 1))).unwrap();
        assert_eq!(range, vec![d(2021, 6, 1)]);
    }

    #[test]
    fn reversed_endpoints_yield_empty_range() {
        let range =
            date_range(&DateSpec::iso("2021-06-02"), &DateSpec::iso("2021-06-01")).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn text_and_calendar_specs_agree() {
        let from_text =
            date_range(&DateSpec::iso("2021-01-01"), &DateSpec::iso("2021-01-03")).unwrap();
        let from_dates =
            date_range(&DateSpec::from(d(2021, 1, 1)), &DateSpec::from(d(2021, 1, 3))).unwrap();
        assert_eq!(from_text, from_dates);
    }

    #[test]
    fn unparsable_text_is_descriptive() {
        let err =
            date_range(&DateSpec::iso("not-a-date"), &DateSpec::iso("2021-01-01")).unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn formats_with_custom_pattern() {
        let formatted = format_date(&DateSpec::from(d(2020, 12, 31)), "%Y/%m/%d").unwrap();
        assert_eq!(formatted, "2020/12/31");
    }
}
