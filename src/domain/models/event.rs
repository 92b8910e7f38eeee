use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventId(Uuid);
impl EventId {
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

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: EventId,
        title: &str,
        description: &str,
        date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::EmptyDescription);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            date,
            created_at: Utc::now(),
        })
    }

    pub fn reconstruct(
        id: EventId,
        title: String,
        description: String,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date,
            created_at,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
