//! Work session lifecycle: start, stop, listing, and statistics.

pub mod service;

pub use service::SessionService;
