//! Demo events for a fresh installation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::EventResult;
use crate::models::{Category, NewEvent};
use crate::repository::EventRepository;

struct Span {
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
}

fn timed(day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Option<Span> {
    Some(Span {
        start: day.and_hms_opt(start.0, start.1, 0)?,
        end: day.and_hms_opt(end.0, end.1, 0)?,
        all_day: false,
    })
}

fn all_day(day: NaiveDate) -> Option<Span> {
    Some(Span {
        start: day.and_time(NaiveTime::MIN),
        end: day.succ_opt()?.and_time(NaiveTime::MIN),
        all_day: true,
    })
}

fn event(
    title: &str,
    description: &str,
    span: Option<Span>,
    location: &str,
    category: Category,
) -> Option<NewEvent> {
    let span = span?;
    Some(NewEvent {
        title: title.to_string(),
        description: Some(description.to_string()),
        start_date: span.start,
        end_date: span.end,
        location: Some(location.to_string()),
        category: category.to_string(),
        is_all_day: span.all_day,
    })
}

/// The demo set, dated relative to `today`.
///
/// All-day entries run from midnight to the following midnight.
pub fn demo_events(today: NaiveDate) -> Vec<NewEvent> {
    let in_days = |n: i64| today.checked_add_signed(TimeDelta::days(n));

    [
        event(
            "Project Kickoff Meeting",
            "Initial meeting to discuss project goals and timeline",
            in_days(1).and_then(|d| timed(d, (10, 0), (11, 0))),
            "Conference Room A",
            Category::Meeting,
        ),
        event(
            "Code Review Session",
            "Review pull requests and discuss code quality",
            in_days(2).and_then(|d| timed(d, (14, 0), (15, 30))),
            "Virtual - Teams",
            Category::Work,
        ),
        event(
            "Team Building Event",
            "Quarterly team building activity",
            in_days(5).and_then(all_day),
            "City Park",
            Category::Personal,
        ),
        event(
            "Christmas Holiday",
            "Office closed for Christmas",
            NaiveDate::from_ymd_opt(today.year(), 12, 25).and_then(all_day),
            "N/A",
            Category::Holiday,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Insert [`demo_events`] when the store is empty.
///
/// Returns how many events were inserted.
pub async fn seed_if_empty<R: EventRepository>(repository: &R, today: NaiveDate) -> EventResult<usize> {
    let existing = repository.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "Store already has events, skipping demo data");
        return Ok(0);
    }

    let events = demo_events(today);
    let total = events.len();
    for new_event in events {
        repository.create(new_event).await?;
    }

    tracing::info!(count = total, "Seeded demo events");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventFilter, EventInput};
    use crate::repository::InMemoryEventRepository;
    use crate::validation::validate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_demo_events_are_valid() {
        let events = demo_events(today());
        assert_eq!(events.len(), 4);

        for new_event in events {
            let title = new_event.title.clone();
            assert!(
                validate(&EventInput::from(new_event)).is_ok(),
                "{} should validate",
                title
            );
        }
    }

    #[test]
    fn test_demo_event_dates() {
        let events = demo_events(today());

        assert_eq!(
            events[0].start_date,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(10, 0, 0).unwrap()
        );
        assert!(!events[0].is_all_day);

        assert!(events[2].is_all_day);
        assert_eq!(events[2].start_date.date(), NaiveDate::from_ymd_opt(2025, 3, 19).unwrap());

        assert!(events[3].is_all_day);
        assert_eq!(events[3].start_date.date(), NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert_eq!(events[3].end_date.date(), NaiveDate::from_ymd_opt(2025, 12, 26).unwrap());
    }

    #[tokio::test]
    async fn test_seed_only_into_empty_store() {
        let repo = InMemoryEventRepository::new();

        assert_eq!(seed_if_empty(&repo, today()).await.unwrap(), 4);
        assert_eq!(seed_if_empty(&repo, today()).await.unwrap(), 0);

        let events = repo.list(EventFilter::default()).await.unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].title, "Project Kickoff Meeting");
    }
}
