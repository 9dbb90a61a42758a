//! Clipping window for duration aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Optional `[after, before]` bounds applied to work sessions when
/// computing statistics. Built per request, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationWindow {
    /// Lower bound; session time before it is ignored.
    pub after: Option<DateTime<Utc>>,
    /// Upper bound; session time after it is ignored.
    pub before: Option<DateTime<Utc>>,
}

impl DurationWindow {
    /// Build a window, rejecting `after > before`.
    pub fn new(
        after: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
    ) -> Result<Self, AppError> {
        if let (Some(a), Some(b)) = (after, before) {
            if a > b {
                return Err(AppError::invalid_field(
                    "after",
                    "must not be later than before",
                ));
            }
        }
        Ok(Self { after, before })
    }

    /// An unbounded window.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Clamp `before` so that it never lies past `now`.
    pub fn clamp_to(self, now: DateTime<Utc>) -> Self {
        Self {
            after: self.after,
            before: self.before.map(|b| b.min(now)),
        }
    }
}
