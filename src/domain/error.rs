use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("User is already registered for this event")]
    AlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Event not found")]
    EventNotFound,

    #[error("Registration not found")]
    RegistrationNotFound,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Empty name")]
    EmptyName,

    #[error("Empty title")]
    EmptyTitle,

    #[error("Empty description")]
    EmptyDescription,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
