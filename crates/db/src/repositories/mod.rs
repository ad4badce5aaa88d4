//! Read-only repositories over the platform tables.

pub mod property_repo;
pub mod user_repo;

pub use property_repo::PropertyRepo;
pub use user_repo::UserRepo;
