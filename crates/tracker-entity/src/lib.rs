//! # tracker-entity
//!
//! Domain entity models for the time tracker. Every struct in this crate
//! represents a database table row or the input needed to write one.
//! Row types derive `sqlx::FromRow` and serialize with camelCase keys.

pub mod session;
pub mod stats;
pub mod user;

/// Identifier type shared by users, sessions, and tasks.
pub type Id = i64;
