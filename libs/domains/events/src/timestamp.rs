//! Lenient parsing of wall-clock timestamps.
//!
//! Accepted inputs, tried in order:
//!
//! - `2025-01-01T09:00:00` (optionally with fractional seconds)
//! - `2025-01-01T09:00`, as sent by `<input type="datetime-local">`
//! - `2025-01-01 09:00:00` and `2025-01-01 09:00`
//! - `2025-01-01T09:00:00+02:00` / `...Z`; the offset is dropped and the
//!   wall-clock part kept
//! - `2025-01-01`, meaning midnight
//!
//! Output is always `YYYY-MM-DDTHH:MM:SS`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, de::Error as _};

const WALL_CLOCK_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Format used for HTML `datetime-local` inputs.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(value) = raw.parse::<NaiveDateTime>() {
        return Some(value);
    }

    if let Some(value) = WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(value);
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Serde adapter for `Option<NaiveDateTime>` fields.
///
/// Missing, `null` and blank values all become `None`; anything else must
/// parse.
pub mod option {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse(text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parses_supported_shapes() {
        let nine = at(2025, 1, 1, 9, 0);
        for raw in [
            "2025-01-01T09:00:00",
            "2025-01-01T09:00:00.000",
            "2025-01-01T09:00",
            "2025-01-01 09:00:00",
            "2025-01-01 09:00",
            "2025-01-01T09:00:00Z",
            "2025-01-01T09:00:00+02:00",
            "  2025-01-01T09:00  ",
        ] {
            assert_eq!(parse(raw), Some(nine), "input {:?}", raw);
        }
    }

    #[test]
    fn test_date_only_means_midnight() {
        assert_eq!(parse("2025-12-25"), Some(at(2025, 12, 25, 0, 0)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("tomorrow"), None);
        assert_eq!(parse("2025-13-01T09:00"), None);
    }

    #[derive(Deserialize, serde::Serialize)]
    struct Wrapper {
        #[serde(default, with = "option")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_option_adapter() {
        let blank: Wrapper = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        assert_eq!(blank.at, None);

        let missing: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.at, None);

        let short: Wrapper = serde_json::from_str(r#"{"at": "2025-01-01T09:00"}"#).unwrap();
        assert_eq!(short.at, Some(at(2025, 1, 1, 9, 0)));
        assert_eq!(
            serde_json::to_string(&short).unwrap(),
            r#"{"at":"2025-01-01T09:00:00"}"#
        );

        assert!(serde_json::from_str::<Wrapper>(r#"{"at": "soon"}"#).is_err());
    }
}
