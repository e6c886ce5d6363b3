// ============================================================================
// Console API - Auth Handlers
// File: crates/console-api/src/handlers/auth.rs
// ============================================================================
//! Login handler

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use console_core::menu::MenuView;
use console_core::services::{AuthService, UserInfo};

use super::parse_json;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// Login request payload, from the query string or a JSON body.
///
/// Blank fields are passed through to the login flow, which reports them as
/// an unknown username or an incorrect password.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub menu_list: Vec<MenuView>,
    pub user_info: UserInfo,
    pub roles: String,
}

/// Login handler - POST /user/login
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Query(query): Query<LoginRequest>,
    body: Bytes,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    // URL parameters win; otherwise fall back to the JSON body
    let credentials = if query.is_complete() {
        query
    } else {
        parse_json::<LoginRequest>(&body, "Malformed request, send JSON or URL parameters")?
    };

    let result = auth.login(&credentials.username, &credentials.password).await?;

    Ok(Json(ApiResponse::success_with_message(
        LoginResponse {
            token: result.token,
            menu_list: result.menu_list,
            user_info: result.user,
            roles: result.roles,
        },
        "Login successful",
    )))
}
