use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    models::{
        event::Event,
        registration::{Registration, RegistrationId},
        user::User,
    },
    repositories::{
        event_repository::EventRepository, registration_repository::RegistrationRepository,
        user_repository::UserRepository,
    },
};

pub struct RegistrationUsecase<R: RegistrationRepository, U: UserRepository, E: EventRepository> {
    registration_repository: R,
    user_repository: U,
    event_repository: E,
}

impl<R: RegistrationRepository, U: UserRepository, E: EventRepository>
    RegistrationUsecase<R, U, E>
{
    pub fn new(registration_repository: R, user_repository: U, event_repository: E) -> Self {
        Self {
            registration_repository,
            user_repository,
            event_repository,
        }
    }

    pub async fn register(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Registration, DomainError>
    where
        R: Send + Sync,
        U: Send + Sync,
        E: Send + Sync,
    {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let event = self
            .event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound)?;

        // Check-then-write: two identical concurrent requests can both pass
        // this check, since no compound unique constraint backs it
        if self
            .registration_repository
            .find_by_user_and_event(user_id, event_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyRegistered);
        }

        let registration = Registration::new(RegistrationId::new(), *user.id(), *event.id());
        self.registration_repository.insert(&registration).await?;

        Ok(registration)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<(User, Vec<(Registration, Option<Event>)>), DomainError>
    where
        R: Send + Sync,
        U: Send + Sync,
        E: Send + Sync,
    {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let registrations = self.registration_repository.list_for_user(user_id).await?;

        Ok((user, registrations))
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Registration, DomainError>
    where
        R: Send + Sync,
        U: Send + Sync,
        E: Send + Sync,
    {
        self.registration_repository
            .delete_by_id(id)
            .await?
            .ok_or(DomainError::RegistrationNotFound)
    }
}
