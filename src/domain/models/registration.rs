use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::models::{event::EventId, user::UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationId(Uuid);
impl RegistrationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Join record linking one user to one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    id: RegistrationId,
    user_id: UserId,
    event_id: EventId,
    registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(id: RegistrationId, user_id: UserId, event_id: EventId) -> Self {
        Self {
            id,
            user_id,
            event_id,
            registered_at: Utc::now(),
        }
    }

    pub fn reconstruct(
        id: RegistrationId,
        user_id: UserId,
        event_id: EventId,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            event_id,
            registered_at,
        }
    }

    pub fn id(&self) -> &RegistrationId {
        &self.id
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
