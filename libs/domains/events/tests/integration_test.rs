//! Integration tests for the Events domain
//!
//! These run against real PostgreSQL via testcontainers to check that the
//! SeaORM repository matches the in-memory one:
//! - ids are assigned by the database
//! - date window filtering and ordering happen in SQL
//! - updates and deletes report missing rows

use domain_events::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn timed(builder: &TestDataBuilder, title: &str, day: u64, hour: u32) -> NewEvent {
    NewEvent {
        title: builder.title(title),
        description: Some("Integration test event".to_string()),
        start_date: builder.at(day, hour, 0),
        end_date: builder.at(day, hour + 1, 0),
        location: None,
        category: Category::Work.to_string(),
        is_all_day: false,
    }
}

#[tokio::test]
async fn test_create_and_get_event() {
    let db = TestDatabase::new().await;
    let repo = PgEventRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = timed(&builder, "planning", 0, 9);
    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(Event::from_new(created.id, input), created);

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "event should exist");
    assert_eq!(retrieved, created);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_list_window_and_order() {
    let db = TestDatabase::new().await;
    let repo = PgEventRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_window");

    repo.create(timed(&builder, "late", 9, 9)).await.unwrap();
    repo.create(timed(&builder, "early", 1, 9)).await.unwrap();
    repo.create(timed(&builder, "middle", 4, 9)).await.unwrap();

    let all = repo.list(EventFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    let starts: Vec<_> = all.iter().map(|e| e.start_date).collect();
    assert_non_decreasing(&starts, "events ordered by start date");

    // Touching the window edge counts as overlap
    let filter = EventFilter {
        start: Some(builder.at(1, 10, 0)),
        end: Some(builder.at(4, 9, 0)),
    };
    let window = repo.list(filter).await.unwrap();
    let titles: Vec<_> = window.iter().map(|e| e.title.clone()).collect();
    assert_eq!(titles, vec![builder.title("early"), builder.title("middle")]);
}

#[tokio::test]
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgEventRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_delete");

    let created = repo.create(timed(&builder, "draft", 2, 13)).await.unwrap();

    let mut change = timed(&builder, "final", 3, 15);
    change.location = Some("Room 4".to_string());
    let updated = repo.update(created.id, change).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.location.as_deref(), Some("Room 4"));

    let missing = repo.update(created.id + 1000, timed(&builder, "ghost", 1, 9)).await;
    assert!(matches!(missing, Err(EventError::NotFound(_))));

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_service_and_seed_against_postgres() {
    let db = TestDatabase::new().await;
    let service = EventService::new(PgEventRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("seed");

    let inserted = seed::seed_if_empty(service.repository(), builder.base_date())
        .await
        .unwrap();
    assert_eq!(inserted, 4);
    assert_eq!(
        seed::seed_if_empty(service.repository(), builder.base_date())
            .await
            .unwrap(),
        0
    );

    let result = service
        .update_event(
            9999,
            EventInput {
                title: Some("Nothing".to_string()),
                ..EventInput::default()
            },
        )
        .await;
    assert!(matches!(result, Err(EventError::NotFound(9999))));
}
