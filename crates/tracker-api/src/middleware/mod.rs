//! Axum middleware stack.

pub mod cors;
pub mod logging;
pub mod panic;
pub mod request_id;
