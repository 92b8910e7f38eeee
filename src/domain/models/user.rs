use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(Uuid);
impl UserId {
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Value object for a normalized (trimmed, lowercased) email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(String);
impl EmailAddress {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized = value.trim().to_lowercase();
        match normalized.split_once('@') {
            Some((local, host)) if !local.is_empty() && !host.is_empty() => Ok(Self(normalized)),
            _ => Err(DomainError::InvalidEmail),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, name: &str, email: EmailAddress) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            email,
            created_at: Utc::now(),
        })
    }

    pub fn reconstruct(
        id: UserId,
        name: String,
        email: EmailAddress,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
