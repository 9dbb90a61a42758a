//! # tracker-service
//!
//! Business logic layer for the time tracker. Each service orchestrates
//! repositories and external collaborators, and receives the
//! [`RequestContext`] of the request it serves.

pub mod context;
pub mod session;
pub mod stats;
pub mod user;

pub use context::RequestContext;
pub use session::SessionService;
pub use user::UserService;
