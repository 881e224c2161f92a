//! Event payload rules.
//!
//! Rules run in a fixed order and every one is evaluated, so a single
//! response lists all violations. Each violation is keyed by the camelCase
//! field it concerns.

use crate::models::{Category, EventInput, NewEvent};
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::ValidateLength;

pub const TITLE_MAX: u64 = 200;
pub const TITLE_MIN: u64 = 3;
pub const DESCRIPTION_MAX: u64 = 1000;
pub const LOCATION_MAX: u64 = 300;

/// Longest allowed span for a timed event, in hours.
pub const MAX_TIMED_HOURS: i64 = 24;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

struct Rule {
    field: &'static str,
    message: String,
    holds: fn(&EventInput) -> bool,
}

impl Rule {
    fn new(field: &'static str, message: impl Into<String>, holds: fn(&EventInput) -> bool) -> Self {
        Self {
            field,
            message: message.into(),
            holds,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn within(value: &Option<String>, min: Option<u64>, max: Option<u64>) -> bool {
    match non_blank(value) {
        Some(text) => text.validate_length(min, max, None),
        None => true,
    }
}

fn ordered(input: &EventInput) -> bool {
    match (input.start_date, input.end_date) {
        (Some(start), Some(end)) => start < end,
        _ => true,
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("title", "Title is required", |e| non_blank(&e.title).is_some()),
        Rule::new(
            "title",
            format!("Title cannot exceed {} characters", TITLE_MAX),
            |e| within(&e.title, None, Some(TITLE_MAX)),
        ),
        Rule::new(
            "title",
            format!("Title must be at least {} characters", TITLE_MIN),
            |e| within(&e.title, Some(TITLE_MIN), None),
        ),
        Rule::new(
            "description",
            format!("Description cannot exceed {} characters", DESCRIPTION_MAX),
            |e| within(&e.description, None, Some(DESCRIPTION_MAX)),
        ),
        Rule::new("startDate", "Start date is required", |e| e.start_date.is_some()),
        Rule::new("startDate", "Start date must be before end date", ordered),
        Rule::new("endDate", "End date is required", |e| e.end_date.is_some()),
        Rule::new("endDate", "End date must be after start date", ordered),
        Rule::new(
            "location",
            format!("Location cannot exceed {} characters", LOCATION_MAX),
            |e| within(&e.location, None, Some(LOCATION_MAX)),
        ),
        Rule::new("category", "Category is required", |e| {
            non_blank(&e.category).is_some()
        }),
        Rule::new(
            "category",
            format!("Category must be one of: {}", Category::list()),
            |e| match non_blank(&e.category) {
                Some(category) => Category::from_str(category).is_ok(),
                None => true,
            },
        ),
        Rule::new(
            "endDate",
            "Non-all-day events cannot exceed 24 hours duration",
            |e| match (e.start_date, e.end_date) {
                (Some(start), Some(end)) if !e.is_all_day => end - start <= TimeDelta::hours(MAX_TIMED_HOURS),
                _ => true,
            },
        ),
        Rule::new(
            "startDate",
            "All-day events should start at midnight",
            |e| match e.start_date {
                Some(start) if e.is_all_day => start.time() == NaiveTime::MIN,
                _ => true,
            },
        ),
    ]
});

/// Check `input` against every rule, returning the violations in rule order.
pub fn validate(input: &EventInput) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = RULES
        .iter()
        .filter(|rule| !(rule.holds)(input))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message.clone(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl EventInput {
    /// Validate and convert into a storable payload.
    ///
    /// Blank optional text fields are stored as absent.
    pub fn validated(self) -> Result<NewEvent, Vec<FieldError>> {
        validate(&self)?;

        let missing = |field: &'static str, message: &str| {
            vec![FieldError {
                field,
                message: message.to_string(),
            }]
        };

        Ok(NewEvent {
            title: self.title.ok_or_else(|| missing("title", "Title is required"))?,
            description: self.description.filter(|s| !s.trim().is_empty()),
            start_date: self
                .start_date
                .ok_or_else(|| missing("startDate", "Start date is required"))?,
            end_date: self
                .end_date
                .ok_or_else(|| missing("endDate", "End date is required"))?,
            location: self.location.filter(|s| !s.trim().is_empty()),
            category: self
                .category
                .ok_or_else(|| missing("category", "Category is required"))?,
            is_all_day: self.is_all_day,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn valid() -> EventInput {
        EventInput {
            id: None,
            title: Some("Team Meeting".to_string()),
            description: Some("Weekly sync".to_string()),
            start_date: Some(at(6, 10, 0)),
            end_date: Some(at(6, 11, 0)),
            location: Some("Room A".to_string()),
            category: Some("Meeting".to_string()),
            is_all_day: false,
        }
    }

    fn messages(input: &EventInput) -> Vec<String> {
        validate(input)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn test_empty_input_reports_every_required_field() {
        assert_eq!(
            messages(&EventInput::default()),
            vec![
                "title: Title is required",
                "startDate: Start date is required",
                "endDate: End date is required",
                "category: Category is required",
            ]
        );
    }

    #[test]
    fn test_blank_title_is_only_required() {
        let input = EventInput {
            title: Some("   ".to_string()),
            ..valid()
        };
        assert_eq!(messages(&input), vec!["title: Title is required"]);
    }

    #[test]
    fn test_title_length_bounds() {
        let short = EventInput {
            title: Some("AB".to_string()),
            ..valid()
        };
        assert_eq!(
            messages(&short),
            vec!["title: Title must be at least 3 characters"]
        );

        let exact = EventInput {
            title: Some("x".repeat(200)),
            ..valid()
        };
        assert!(validate(&exact).is_ok());

        let long = EventInput {
            title: Some("x".repeat(201)),
            ..valid()
        };
        assert_eq!(
            messages(&long),
            vec!["title: Title cannot exceed 200 characters"]
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        let input = EventInput {
            title: Some("é".repeat(200)),
            ..valid()
        };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_optional_text_limits() {
        let input = EventInput {
            description: Some("d".repeat(1001)),
            location: Some("l".repeat(301)),
            ..valid()
        };
        assert_eq!(
            messages(&input),
            vec![
                "description: Description cannot exceed 1000 characters",
                "location: Location cannot exceed 300 characters",
            ]
        );
    }

    #[test]
    fn test_end_must_follow_start() {
        let equal = EventInput {
            end_date: Some(at(6, 10, 0)),
            ..valid()
        };
        assert_eq!(
            messages(&equal),
            vec![
                "startDate: Start date must be before end date",
                "endDate: End date must be after start date",
            ]
        );
    }

    #[test]
    fn test_unknown_category() {
        let input = EventInput {
            category: Some("work".to_string()),
            ..valid()
        };
        assert_eq!(
            messages(&input),
            vec!["category: Category must be one of: Work, Personal, Meeting, Holiday, General"]
        );
    }

    #[test]
    fn test_timed_duration_limit() {
        let exactly_a_day = EventInput {
            end_date: Some(at(7, 10, 0)),
            ..valid()
        };
        assert!(validate(&exactly_a_day).is_ok());

        let too_long = EventInput {
            end_date: Some(at(7, 10, 1)),
            ..valid()
        };
        assert_eq!(
            messages(&too_long),
            vec!["endDate: Non-all-day events cannot exceed 24 hours duration"]
        );
    }

    #[test]
    fn test_all_day_rules() {
        let multi_day = EventInput {
            start_date: Some(at(6, 0, 0)),
            end_date: Some(at(9, 0, 0)),
            is_all_day: true,
            ..valid()
        };
        assert!(validate(&multi_day).is_ok());

        let not_midnight = EventInput {
            start_date: Some(at(6, 9, 0)),
            end_date: Some(at(7, 0, 0)),
            is_all_day: true,
            ..valid()
        };
        assert_eq!(
            messages(&not_midnight),
            vec!["startDate: All-day events should start at midnight"]
        );
    }

    #[test]
    fn test_validated_normalizes_blank_optionals() {
        let new_event = EventInput {
            description: Some("  ".to_string()),
            location: Some(String::new()),
            ..valid()
        }
        .validated()
        .unwrap();

        assert_eq!(new_event.title, "Team Meeting");
        assert_eq!(new_event.description, None);
        assert_eq!(new_event.location, None);
        assert_eq!(new_event.category, "Meeting");
    }
}
