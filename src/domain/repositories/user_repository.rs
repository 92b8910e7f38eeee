use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::user::{EmailAddress, User},
};

#[async_trait]
pub trait UserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
