//! API Response wrapper
//!
//! Every body carries a numeric `code` mirroring the HTTP status and an
//! optional human readable `info`; the payload fields sit next to them.

use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            info: None,
            data,
        }
    }

    pub fn success_with_message(data: T, message: &str) -> Self {
        Self {
            code: 200,
            info: Some(message.to_string()),
            data,
        }
    }
}

/// Payload for responses that carry nothing besides `code` and `info`.
#[derive(Serialize)]
pub struct Empty {}
