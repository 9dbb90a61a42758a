//! Turns handler panics into the JSON 500 body.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use tracker_core::error::AppError;

use crate::error::ApiError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Layer that answers a panicking request instead of dropping the connection.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    let handler: PanicHandler = panic_response;
    CatchPanicLayer::custom(handler)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    ApiError(AppError::internal(format!("Handler panicked: {detail}"))).into_response()
}
