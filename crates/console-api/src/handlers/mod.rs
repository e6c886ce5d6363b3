//! HTTP handlers

pub mod auth;
pub mod health;
pub mod user;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a JSON body, reporting failures in the console's `{code, info}` shape.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &Bytes, message: &str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::BadRequest(message.to_string())
    })
}
