//! # tracker-core
//!
//! Core crate for the time tracker. Contains configuration schemas,
//! pagination and window types, the external collaborator traits,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other tracker crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
