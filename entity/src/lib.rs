pub mod events;
pub mod registrations;
pub mod users;

pub mod prelude {
    pub use super::events::Entity as Events;
    pub use super::registrations::Entity as Registrations;
    pub use super::users::Entity as Users;
}
