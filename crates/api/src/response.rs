//! Shared response bodies for the JSON API.
//!
//! Mutating endpoints answer with a short `{ "message": ... }` acknowledgement
//! instead of echoing the entry back.

use diary_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{ "message": ..., "id": ... }` returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}
