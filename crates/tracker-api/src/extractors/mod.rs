//! Custom Axum extractors.
//!
//! Wrappers around the stock extractors that report rejections in the
//! API error format instead of axum's plain-text bodies.

pub mod context;
pub mod json;
pub mod path;
pub mod query;
pub mod time;

pub use context::RequestCtx;
pub use json::{ApiJson, ValidatedJson};
pub use path::ApiPath;
pub use query::ApiQuery;
