use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    models::event::{Event, EventId},
    repositories::event_repository::EventRepository,
};

pub struct EventUsecase<E: EventRepository> {
    event_repository: E,
}

impl<E: EventRepository> EventUsecase<E> {
    pub fn new(event_repository: E) -> Self {
        Self { event_repository }
    }

    pub async fn create_event(
        &self,
        title: String,
        description: String,
        date: DateTime<Utc>,
    ) -> Result<Event, DomainError>
    where
        E: Send + Sync,
    {
        let event = Event::new(EventId::new(), &title, &description, date)?;
        self.event_repository.insert(&event).await?;

        Ok(event)
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, DomainError>
    where
        E: Send + Sync,
    {
        Ok(self.event_repository.list().await?)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Event, DomainError>
    where
        E: Send + Sync,
    {
        self.event_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EventNotFound)
    }
}
