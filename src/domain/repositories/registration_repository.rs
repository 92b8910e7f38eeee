use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{event::Event, registration::Registration},
};

#[async_trait]
pub trait RegistrationRepository {
    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Registration>, RepositoryError>;

    async fn insert(&self, registration: &Registration) -> Result<(), RepositoryError>;

    /// All registrations of a user, each paired with its event when the event
    /// still exists
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(Registration, Option<Event>)>, RepositoryError>;

    /// Deletes a registration and returns the removed record, or `None` if no
    /// registration had that id
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError>;
}
