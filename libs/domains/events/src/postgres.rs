use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{EventError, EventResult},
    models::{Event, EventFilter, NewEvent},
    repository::EventRepository,
};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>> {
        let mut query = entity::Entity::find();

        if let Some(start) = filter.start {
            query = query.filter(entity::Column::EndDate.gte(start));
        }

        if let Some(end) = filter.end {
            query = query.filter(entity::Column::StartDate.lte(end));
        }

        let models = query
            .order_by_asc(entity::Column::StartDate)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Event::from))
    }

    async fn create(&self, input: NewEvent) -> EventResult<Event> {
        let model = entity::ActiveModel::from_new(None, input)
            .insert(&self.db)
            .await?;

        tracing::info!(event_id = model.id, "Created event");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: NewEvent) -> EventResult<Event> {
        let model = entity::ActiveModel::from_new(Some(id), input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => EventError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(event_id = id, "Updated event");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> EventResult<bool> {
        let rows_affected = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?
            .rows_affected;

        if rows_affected > 0 {
            tracing::info!(event_id = id, "Deleted event");
        }
        Ok(rows_affected > 0)
    }

    async fn count(&self) -> EventResult<usize> {
        let count = entity::Entity::find().count(&self.db).await?;
        Ok(count as usize)
    }
}
