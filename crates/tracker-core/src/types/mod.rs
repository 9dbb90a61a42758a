//! Core type definitions used across the tracker workspace.

pub mod pagination;
pub mod window;

pub use pagination::PageRequest;
pub use window::DurationWindow;
