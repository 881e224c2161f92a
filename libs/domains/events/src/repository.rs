use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::EventResult;
use crate::models::{Event, EventFilter, NewEvent};

/// Repository trait for Event persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Events overlapping `filter`, ordered by start date then id
    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>>;

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>>;

    /// Store a validated event and assign it a fresh id
    async fn create(&self, input: NewEvent) -> EventResult<Event>;

    /// Overwrite every field of an existing event
    async fn update(&self, id: i32, input: NewEvent) -> EventResult<Event>;

    /// Returns `false` when no event had this id
    async fn delete(&self, id: i32) -> EventResult<bool>;

    async fn count(&self) -> EventResult<usize>;
}

#[derive(Debug, Default)]
struct Store {
    events: BTreeMap<i32, Event>,
    last_id: i32,
}

/// In-memory implementation of EventRepository (for development/testing)
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>> {
        let store = self.store.read().await;

        let mut result: Vec<Event> = store
            .events
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        result.sort_by_key(|e| (e.start_date, e.id));

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let store = self.store.read().await;
        Ok(store.events.get(&id).cloned())
    }

    async fn create(&self, input: NewEvent) -> EventResult<Event> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let event = Event::from_new(store.last_id, input);
        store.events.insert(event.id, event.clone());

        tracing::info!(event_id = event.id, "Created event");
        Ok(event)
    }

    async fn update(&self, id: i32, input: NewEvent) -> EventResult<Event> {
        let mut store = self.store.write().await;

        let Some(slot) = store.events.get_mut(&id) else {
            return Err(crate::error::EventError::NotFound(id));
        };
        *slot = Event::from_new(id, input);

        tracing::info!(event_id = id, "Updated event");
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> EventResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.events.remove(&id).is_some();

        if removed {
            tracing::info!(event_id = id, "Deleted event");
        }
        Ok(removed)
    }

    async fn count(&self) -> EventResult<usize> {
        Ok(self.store.read().await.events.len())
    }
}
