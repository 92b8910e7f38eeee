pub mod event_handler;
pub mod registration_handler;
pub mod user_handler;
