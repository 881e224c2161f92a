use std::sync::Arc;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventFilter, EventInput};
use crate::repository::EventRepository;

/// Service layer for Event business logic
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// List events, optionally restricted to a date window
    pub async fn list_events(&self, filter: EventFilter) -> EventResult<Vec<Event>> {
        self.repository.list(filter).await
    }

    pub async fn get_event(&self, id: i32) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// Validate and store a new event. Any `id` in the input is ignored.
    pub async fn create_event(&self, input: EventInput) -> EventResult<Event> {
        let new_event = input.validated()?;
        self.repository.create(new_event).await
    }

    /// Replace an existing event.
    ///
    /// Checks run in this order: body id against path id, existence, then
    /// field validation.
    pub async fn update_event(&self, id: i32, input: EventInput) -> EventResult<Event> {
        if let Some(body_id) = input.id.filter(|body_id| *body_id != id) {
            return Err(EventError::IdMismatch {
                path_id: id,
                body_id,
            });
        }

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(EventError::NotFound(id));
        }

        let new_event = input.validated()?;
        self.repository.update(id, new_event).await
    }

    pub async fn delete_event(&self, id: i32) -> EventResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(EventError::NotFound(id))
        }
    }
}
