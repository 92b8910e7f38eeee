use std::sync::Arc;

use async_trait::async_trait;
use entity::events;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::event::{Event, EventId},
    repositories::event_repository::EventRepository,
};

#[derive(Clone)]
pub struct PostgresEventRepository {
    // Arc because sea-orm's `mock` feature (enabled for tests) removes
    // `Clone` from `DatabaseConnection`
    db: Arc<DatabaseConnection>,
}

impl PostgresEventRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

pub(crate) fn to_domain(model: events::Model) -> Event {
    Event::reconstruct(
        EventId::from_uuid(model.id),
        model.title,
        model.description,
        model.date.to_utc(),
        model.created_at.to_utc(),
    )
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let event = events::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(event.map(to_domain))
    }

    async fn insert(&self, event: &Event) -> Result<(), RepositoryError> {
        let model = events::ActiveModel {
            id: Set(*event.id().as_uuid()),
            title: Set(event.title().to_string()),
            description: Set(event.description().to_string()),
            date: Set(event.date().fixed_offset()),
            created_at: Set(event.created_at().fixed_offset()),
        };

        events::Entity::insert(model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let models = events::Entity::find()
            .order_by_asc(events::Column::Date)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }
}
