pub mod event_usecase;
pub mod registration_usecase;
pub mod user_usecase;
