//! Convenience result type alias for the time tracker.

use crate::error::AppError;

/// A specialized `Result` type for time tracker operations.
pub type AppResult<T> = Result<T, AppError>;
