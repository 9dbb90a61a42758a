//! # tracker-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repository implementations for users and work sessions.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
