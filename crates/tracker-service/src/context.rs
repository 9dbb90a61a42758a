//! Request context carrying the request id and the request clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Built by the HTTP layer and passed into every service method so that
/// log lines carry the request id and every "now" within one request is
/// the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Correlation id, propagated as `x-request-id`.
    pub request_id: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context stamped with the current time.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self::at(request_id, Utc::now())
    }

    /// Creates a context with an explicit request time.
    pub fn at(request_id: impl Into<String>, request_time: DateTime<Utc>) -> Self {
        Self {
            request_id: request_id.into(),
            request_time,
        }
    }
}
