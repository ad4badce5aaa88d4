//! Row models for the platform tables this service reads.

pub mod property;
pub mod user;

pub use property::Property;
pub use user::User;
