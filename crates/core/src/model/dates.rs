use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid exam date: {raw}")]
pub struct ParseExamDateError {
    raw: String,
}

/// Parse a date as the backend sends it.
///
/// Accepts a plain `YYYY-MM-DD` date or an ISO date-time such as
/// `2024-03-01T08:00:00Z`; only the calendar date is kept. Years outside
/// `0000..=9999` carry a sign (`+10000-01-01`), matching how they are
/// written back out.
///
/// # Errors
///
/// Returns `ParseExamDateError` if the part before an optional `T` or space
/// separator is not a valid date.
pub fn parse_exam_date(raw: &str) -> Result<NaiveDate, ParseExamDateError> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _time)| date);

    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| ParseExamDateError {
        raw: raw.to_owned(),
    })
}

/// `#[serde(with = "...")]` adapter for exam dates.
pub(crate) mod exam_date {
    use super::{DATE_FORMAT, Deserialize, Deserializer, NaiveDate, Serializer, parse_exam_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_exam_date(&raw).map_err(serde::de::Error::custom)
    }
}
