//! Date and date-time wire codec.
//!
//! # Responsibility
//! - Convert date-only fields to and from `YYYY-MM-DD`.
//! - Convert date-time fields to and from RFC 3339 UTC timestamps.
//!
//! # Invariants
//! - Outgoing `None` is written as JSON `null`, never omitted.
//! - Incoming absent, `null` or empty values decode to `None`.
//! - Date-only values are never time-zone shifted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire pattern for date-only fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// A non-empty wire value that is not a valid date or timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireDateError {
    InvalidDate(String),
    InvalidDateTime(String),
}

impl Display for WireDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => write!(f, "invalid wire date `{value}`; expected YYYY-MM-DD"),
            Self::InvalidDateTime(value) => {
                write!(f, "invalid wire timestamp `{value}`; expected RFC 3339")
            }
        }
    }
}

impl Error for WireDateError {}

pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Parses a date-only wire value. Blank input yields `Ok(None)`.
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, WireDateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| WireDateError::InvalidDate(trimmed.to_string()))
}

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a timestamp wire value. Blank input yields `Ok(None)`.
///
/// Values without an offset are read as UTC.
pub fn parse_date_time(value: &str) -> Result<Option<DateTime<Utc>>, WireDateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| WireDateError::InvalidDateTime(trimmed.to_string()))
}

/// Serde adapter for `Option<NaiveDate>` fields.
///
/// Use with `#[serde(default, with = "wire_date::date")]`.
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&super::format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_date(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Use with `#[serde(default, with = "wire_date::date_time")]`.
pub mod date_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&super::format_date_time(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_date_time(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_date_time, parse_date, parse_date_time, WireDateError};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn date_round_trip_keeps_calendar_day() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let wire = format_date(&day);
        assert_eq!(wire, "2024-02-29");
        assert_eq!(parse_date(&wire).unwrap(), Some(day));
    }

    #[test]
    fn date_time_round_trip_keeps_instant() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
        let wire = format_date_time(&instant);
        assert_eq!(wire, "2023-12-31T23:59:58.000Z");
        assert_eq!(parse_date_time(&wire).unwrap(), Some(instant));
    }

    #[test]
    fn offsets_normalize_to_utc() {
        let parsed = parse_date_time("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_date_time("2024-05-06T07:08:09.250").unwrap().unwrap();
        assert_eq!(format_date_time(&parsed), "2024-05-06T07:08:09.250Z");
    }

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(parse_date("").unwrap(), None);
        assert_eq!(parse_date_time("  ").unwrap(), None);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            parse_date("31/12/2024").unwrap_err(),
            WireDateError::InvalidDate("31/12/2024".to_string())
        );
        assert!(matches!(
            parse_date_time("yesterday"),
            Err(WireDateError::InvalidDateTime(_))
        ));
    }
}
