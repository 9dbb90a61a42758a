//! User registry: lookup, enrichment-based creation, partial update, deletion.

pub mod passport;
pub mod service;
pub mod validation;

pub use passport::Passport;
pub use service::UserService;
