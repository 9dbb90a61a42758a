//! HTTP request handlers.

pub mod fallback;
pub mod health;
pub mod session;
pub mod stats;
pub mod user;
