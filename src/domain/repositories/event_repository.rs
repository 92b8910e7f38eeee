use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{error::RepositoryError, models::event::Event};

#[async_trait]
pub trait EventRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;
    async fn insert(&self, event: &Event) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;
}
