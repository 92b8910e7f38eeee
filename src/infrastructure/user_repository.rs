use std::sync::Arc;

use async_trait::async_trait;
use entity::users;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::user::{EmailAddress, User, UserId},
    repositories::user_repository::UserRepository,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    // Arc because sea-orm's `mock` feature (enabled for tests) removes
    // `Clone` from `DatabaseConnection`
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn to_domain(model: users::Model) -> Result<User, RepositoryError> {
    let email = EmailAddress::new(&model.email)
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

    Ok(User::reconstruct(
        UserId::from_uuid(model.id),
        model.name,
        email,
        model.created_at.to_utc(),
    ))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email.as_str()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        user.map(to_domain).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        user.map(to_domain).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let model = users::ActiveModel {
            id: Set(*user.id().as_uuid()),
            name: Set(user.name().to_string()),
            email: Set(user.email().as_str().to_string()),
            created_at: Set(user.created_at().fixed_offset()),
        };

        users::Entity::insert(model)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(to_domain).collect()
    }
}
