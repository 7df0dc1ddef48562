//! Request extractors.

use axum::extract::FromRequest;

use super::error::ApiErrorResponse;

/// JSON body extractor whose rejections render as [`ApiErrorResponse`].
///
/// Behaves like `axum::Json`, except malformed or mistyped bodies produce
/// the API's own 400 body instead of axum's plain-text rejection.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiErrorResponse))]
pub struct JsonBody<T>(pub T);
