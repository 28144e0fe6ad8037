//! Request extractors that report failures through [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Same as [`axum::Json`], except a body that cannot be read or decoded is
/// answered with the standard JSON error envelope instead of axum's plain
/// text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
