//! Response envelopes for the resource endpoints.
//!
//! Writes answer `{ "success": true, "message": ..., "data": ... }`. Errors
//! use the same `success` / `message` keys (see [`crate::error::AppError`]).
//! Collection reads return a bare JSON array.

use serde::Serialize;
use showcase_core::types::EntityId;

/// Success envelope for a write.
#[derive(Debug, Serialize)]
pub struct SubmitResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> SubmitResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// Identity of a freshly created record.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: EntityId,
}
