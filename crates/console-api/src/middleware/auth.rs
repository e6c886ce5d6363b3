//! Token authentication for protected routes.
//!
//! Accepts `Authorization: Bearer <token>` or the bare token. On success the
//! subject id is stored in request extensions as [`AuthUser`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use console_security::{JwtError, JwtService};
use console_shared::constants::BEARER_PREFIX;
use console_shared::UserId;

use crate::error::ApiError;

/// Authenticated caller, set by [`require_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
}

pub async fn require_token(
    State(jwt): State<Arc<JwtService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Please log in to obtain a token".to_string()))?;

    let user_id = jwt.authenticate(token).map_err(|e| match e {
        JwtError::TokenExpired => {
            ApiError::Unauthorized("Token expired, please log in again".to_string())
        }
        other => {
            debug!("Token rejected: {}", other);
            ApiError::Unauthorized("Token verification failed".to_string())
        }
    })?;

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(extract_token(&headers("abc.def")), Some("abc.def"));
        assert_eq!(extract_token(&headers("Bearer ")), None);
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }
}
