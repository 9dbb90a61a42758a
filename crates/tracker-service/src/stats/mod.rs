//! Duration statistics: aggregation and presentation.

pub mod aggregator;
pub mod format;

pub use aggregator::aggregate;
pub use format::format_duration;
