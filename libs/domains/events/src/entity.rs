use crate::models::{Event, NewEvent};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the events table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub location: Option<String>,
    pub category: String,
    pub is_all_day: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            location: model.location,
            category: model.category,
            is_all_day: model.is_all_day,
        }
    }
}

impl ActiveModel {
    /// Active model carrying every column of `new_event`; `id` is left to the
    /// database when `None`.
    pub fn from_new(id: Option<i32>, new_event: NewEvent) -> Self {
        Self {
            id: id.map_or(NotSet, Set),
            title: Set(new_event.title),
            description: Set(new_event.description),
            start_date: Set(new_event.start_date),
            end_date: Set(new_event.end_date),
            location: Set(new_event.location),
            category: Set(new_event.category),
            is_all_day: Set(new_event.is_all_day),
        }
    }
}
