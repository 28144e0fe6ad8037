//! Shared response envelope for API handlers.
//!
//! Every API response is `{ "message": ..., "data"?: ..., "changes"?: ... }`.
//! Errors use the same `message` key plus `error`/`code` (see
//! [`crate::error::AppError`]).

use serde::Serialize;

/// Message for successful reads, creates and updates.
pub const MSG_SUCCESS: &str = "success";

/// Message for successful deletes.
pub const MSG_DELETED: &str = "deleted";

/// Standard response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::data(tasks)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<u64>,
}

impl<T: Serialize> Envelope<T> {
    /// `{ "message": "success", "data": ... }`
    pub fn data(data: T) -> Self {
        Self {
            message: MSG_SUCCESS,
            data: Some(data),
            changes: None,
        }
    }
}

impl Envelope<()> {
    /// `{ "message": ..., "changes": n }`
    pub fn changes(message: &'static str, changes: u64) -> Self {
        Self {
            message,
            data: None,
            changes: Some(changes),
        }
    }
}
