//! `RequestCtx` extractor: builds the per-request service context.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_http::request_id::RequestId;
use uuid::Uuid;

use tracker_service::context::RequestContext;

/// Request context available in handlers.
///
/// The id comes from the `x-request-id` assigned by the request-id layer.
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

impl RequestCtx {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for RequestCtx {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestCtx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self(RequestContext::new(request_id)))
    }
}
