use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

use crate::models::{Category, Event, EventInput};
use crate::timestamp::{self, INPUT_FORMAT};
use crate::validation::FieldError;

/// Raw values of the create/edit form, kept as typed so they can be
/// redisplayed after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Checkbox value; absent when unchecked
    #[serde(default)]
    pub is_all_day: Option<String>,
}

impl EventForm {
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: Some(event.id.to_string()),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_date: event.start_date.format(INPUT_FORMAT).to_string(),
            end_date: event.end_date.format(INPUT_FORMAT).to_string(),
            location: event.location.clone().unwrap_or_default(),
            category: event.category.clone(),
            is_all_day: event.is_all_day.then(|| "true".to_string()),
        }
    }

    /// Blank form for a one-hour event at `start` (truncated to the minute),
    /// in the General category.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        let start = start.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(start);

        Self {
            start_date: start.format(INPUT_FORMAT).to_string(),
            end_date: (start + TimeDelta::hours(1)).format(INPUT_FORMAT).to_string(),
            category: Category::General.to_string(),
            ..Self::default()
        }
    }

    pub fn all_day(&self) -> bool {
        matches!(self.is_all_day.as_deref(), Some("true" | "on"))
    }

    /// The hidden id field; `None` when absent, blank, or not a number.
    pub fn parsed_id(&self) -> Option<i32> {
        self.id.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    /// Same shape the JSON API accepts, so both paths share one validator.
    ///
    /// Timestamps that do not parse are treated as missing.
    pub fn to_input(&self) -> EventInput {
        let text = |value: &str| Some(value.to_string()).filter(|s| !s.trim().is_empty());

        EventInput {
            id: self.parsed_id(),
            title: Some(self.title.clone()),
            description: text(&self.description),
            start_date: timestamp::parse(&self.start_date),
            end_date: timestamp::parse(&self.end_date),
            location: text(&self.location),
            category: text(&self.category),
            is_all_day: self.all_day(),
        }
    }
}

/// One-shot banner shown on the list page after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    DeleteFailed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Created => "Event created successfully.",
            Notice::Updated => "Event updated successfully.",
            Notice::Deleted => "Event deleted successfully.",
            Notice::DeleteFailed => "The event could not be deleted. Please try again.",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Notice::DeleteFailed)
    }

    /// List page URL carrying this notice
    pub fn location(self) -> String {
        format!("/events?notice={}", self)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NoticeView {
    pub text: &'static str,
    pub failure: bool,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            text: notice.text(),
            failure: notice.is_failure(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EventRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub when: String,
    pub location: Option<String>,
    pub category: String,
    pub color: &'static str,
}

impl From<Event> for EventRow {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            when: describe_span(event.start_date, event.end_date, event.is_all_day),
            color: event.color(),
            title: event.title,
            description: event.description,
            location: event.location,
            category: event.category,
        }
    }
}

fn describe_span(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> String {
    const DAY: &str = "%a %d %b %Y";

    if all_day {
        let last_day = (end - TimeDelta::days(1)).date().max(start.date());
        if last_day == start.date() {
            format!("{} (all day)", start.format(DAY))
        } else {
            format!("{} to {} (all day)", start.format(DAY), last_day.format(DAY))
        }
    } else if start.date() == end.date() {
        format!("{} {} to {}", start.format(DAY), start.format("%H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{} {} to {} {}",
            start.format(DAY),
            start.format("%H:%M"),
            end.format(DAY),
            end.format("%H:%M")
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Errors grouped by field name, in rule order.
pub(crate) fn errors_by_field(errors: &[FieldError]) -> BTreeMap<&'static str, Vec<String>> {
    let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
    for error in errors {
        grouped.entry(error.field).or_default().push(error.message.clone());
    }
    grouped
}

pub(crate) fn category_options(selected: &str) -> Vec<CategoryOption> {
    Category::ALL
        .iter()
        .map(|c| CategoryOption {
            name: c.as_str(),
            selected: c.as_str() == selected,
        })
        .collect()
}
