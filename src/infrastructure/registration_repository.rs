use std::sync::Arc;

use async_trait::async_trait;
use entity::{events, registrations};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{
        event::{Event, EventId},
        registration::{Registration, RegistrationId},
        user::UserId,
    },
    repositories::registration_repository::RegistrationRepository,
};

#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    // Arc because sea-orm's `mock` feature (enabled for tests) removes
    // `Clone` from `DatabaseConnection`
    db: Arc<DatabaseConnection>,
}

impl PostgresRegistrationRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn to_domain(model: registrations::Model) -> Registration {
    Registration::reconstruct(
        RegistrationId::from_uuid(model.id),
        UserId::from_uuid(model.user_id),
        EventId::from_uuid(model.event_id),
        model.registered_at.to_utc(),
    )
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Registration>, RepositoryError> {
        let registration = registrations::Entity::find()
            .filter(registrations::Column::UserId.eq(user_id))
            .filter(registrations::Column::EventId.eq(event_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(registration.map(to_domain))
    }

    async fn insert(&self, registration: &Registration) -> Result<(), RepositoryError> {
        let model = registrations::ActiveModel {
            id: Set(*registration.id().as_uuid()),
            user_id: Set(*registration.user_id().as_uuid()),
            event_id: Set(*registration.event_id().as_uuid()),
            registered_at: Set(registration.registered_at().fixed_offset()),
        };

        registrations::Entity::insert(model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(Registration, Option<Event>)>, RepositoryError> {
        let rows = registrations::Entity::find()
            .filter(registrations::Column::UserId.eq(user_id))
            .find_also_related(events::Entity)
            .order_by_asc(registrations::Column::RegisteredAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(registration, event)| {
                (
                    to_domain(registration),
                    event.map(super::event_repository::to_domain),
                )
            })
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError> {
        let Some(model) = registrations::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let result = registrations::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // Zero rows affected means a concurrent request deleted it between
        // the lookup and the delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(to_domain(model)))
    }
}
