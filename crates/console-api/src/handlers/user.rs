//! Protected user endpoints: own menu tree, user lookup, username check

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use console_core::domain::SysUser;
use console_core::menu::MenuView;
use console_core::services::{MenuService, UserService};
use console_shared::UserId;

use super::parse_json;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, Empty};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub menu_list: Vec<MenuView>,
    pub roles: String,
}

/// Current user's menu tree - GET /user/menus
pub async fn menus(
    State(menu_service): State<Arc<MenuService>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<ApiResponse<MenuResponse>>, ApiError> {
    let user_menus = menu_service.menus_for_user(auth_user.user_id).await?;

    Ok(Json(ApiResponse::success(MenuResponse {
        roles: user_menus.role_names(),
        menu_list: user_menus.menu_list,
    })))
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// User DTO for responses
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub status: Option<i32>,
}

impl From<SysUser> for UserDto {
    fn from(user: SysUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            avatar: user.avatar,
            email: user.email,
            phonenumber: user.phonenumber,
            status: user.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

/// User lookup by id - GET /user/action?id=N
pub async fn get_user(
    State(users): State<Arc<UserService>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let raw = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Parameter id must not be empty".to_string()))?;
    let id: UserId = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid user id: {}", raw)))?;

    let user = users.get_user(id).await?;

    Ok(Json(ApiResponse::success_with_message(
        UserResponse { user: user.into() },
        "User fetched",
    )))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CheckRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
}

/// Username availability - POST /user/check
pub async fn check_username(
    State(users): State<Arc<UserService>>,
    body: Bytes,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let request: CheckRequest = parse_json(&body, "Malformed request, send JSON")?;
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if !users.is_username_available(&request.username).await? {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }

    Ok(Json(ApiResponse::success_with_message(Empty {}, "Username is available")))
}
