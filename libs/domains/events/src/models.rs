use crate::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};

/// Color for categories outside the known set.
pub const DEFAULT_COLOR: &str = "#6366f1";

/// Event category.
///
/// Stored as its name; matching is exact and case-sensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr, ToSchema,
)]
pub enum Category {
    Work,
    Personal,
    Meeting,
    Holiday,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Meeting,
        Category::Holiday,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Display color for the calendar UI.
    pub fn color(self) -> &'static str {
        match self {
            Category::Work => "#3b82f6",
            Category::Personal => "#10b981",
            Category::Meeting => "#f59e0b",
            Category::Holiday => "#ef4444",
            Category::General => DEFAULT_COLOR,
        }
    }

    /// `"Work, Personal, Meeting, Holiday, General"`
    pub fn list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Color for a stored category string, falling back to [`DEFAULT_COLOR`].
pub fn color_for(category: &str) -> &'static str {
    Category::from_str(category)
        .map(Category::color)
        .unwrap_or(DEFAULT_COLOR)
}

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the store, positive and never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Team Meeting")]
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "2025-01-06T10:00:00")]
    pub start_date: NaiveDateTime,
    #[schema(value_type = String, example = "2025-01-06T11:00:00")]
    pub end_date: NaiveDateTime,
    pub location: Option<String>,
    #[schema(example = "Meeting")]
    pub category: String,
    pub is_all_day: bool,
}

impl Event {
    pub fn from_new(id: i32, new_event: NewEvent) -> Self {
        Self {
            id,
            title: new_event.title,
            description: new_event.description,
            start_date: new_event.start_date,
            end_date: new_event.end_date,
            location: new_event.location,
            category: new_event.category,
            is_all_day: new_event.is_all_day,
        }
    }

    pub fn color(&self) -> &'static str {
        color_for(&self.category)
    }
}

/// Event as returned by the API: the stored fields plus a display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    #[schema(example = "#f59e0b")]
    pub color: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let color = event.color().to_string();
        Self { event, color }
    }
}

/// Create/update payload as submitted, before validation.
///
/// Every field may be missing so that validation can report all problems at
/// once instead of failing on the first absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// Ignored on create; on update it must match the path id when present
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    #[schema(example = "Team Meeting")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "timestamp::option")]
    #[schema(value_type = Option<String>, example = "2025-01-06T10:00:00")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp::option")]
    #[schema(value_type = Option<String>, example = "2025-01-06T11:00:00")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[schema(example = "Meeting")]
    pub category: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub location: Option<String>,
    pub category: String,
    pub is_all_day: bool,
}

impl From<NewEvent> for EventInput {
    fn from(new_event: NewEvent) -> Self {
        Self {
            id: None,
            title: Some(new_event.title),
            description: new_event.description,
            start_date: Some(new_event.start_date),
            end_date: Some(new_event.end_date),
            location: new_event.location,
            category: Some(new_event.category),
            is_all_day: new_event.is_all_day,
        }
    }
}

/// Optional date window for listing.
///
/// An event is included when it overlaps the window: it ends at or after
/// `start` and begins at or before `end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    /// Lower bound; events ending before this are excluded
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    #[param(value_type = Option<String>, example = "2025-01-01T00:00:00")]
    pub start: Option<NaiveDateTime>,
    /// Upper bound; events starting after this are excluded
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    #[param(value_type = Option<String>, example = "2025-01-31T23:59:59")]
    pub end: Option<NaiveDateTime>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.start.is_none_or(|start| event.end_date >= start)
            && self.end.is_none_or(|end| event.start_date <= end)
    }
}

/// Data returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedEvent {
    pub id: i32,
}
