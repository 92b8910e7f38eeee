use crate::domain::{
    error::DomainError,
    models::user::{EmailAddress, User, UserId},
    repositories::user_repository::UserRepository,
};

pub struct UserUsecase<U: UserRepository> {
    user_repository: U,
}

impl<U: UserRepository> UserUsecase<U> {
    pub fn new(user_repository: U) -> Self {
        Self { user_repository }
    }

    pub async fn create_user(&self, name: String, email: String) -> Result<User, DomainError>
    where
        U: Send + Sync,
    {
        let email = EmailAddress::new(&email)?;

        // Application-level pre-check; the unique index is the backstop
        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        let user = User::new(UserId::new(), &name, email)?;
        self.user_repository.insert(&user).await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError>
    where
        U: Send + Sync,
    {
        Ok(self.user_repository.list().await?)
    }
}
