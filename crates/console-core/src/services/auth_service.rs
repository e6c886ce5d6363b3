// ============================================================================
// Console Core - Authentication Service
// File: crates/console-core/src/services/auth_service.rs
// ============================================================================
//! Login: credential check, token issuing, and the user's menu tree

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use console_security::{JwtService, PasswordService};
use console_shared::UserId;
use crate::domain::SysUser;
use crate::error::DomainError;
use crate::menu::MenuView;
use crate::repositories::UserRepository;
use crate::services::menu_service::MenuService;

/// Authentication service for handling the login flow
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    menu_service: Arc<MenuService>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        menu_service: Arc<MenuService>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            menu_service,
            jwt,
        }
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for username: {}", username);

        // 1. Find user by username
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: username not found: {}", username);
                DomainError::UsernameNotFound(username.to_string())
            })?;

        // 2. Verify password
        if password.is_empty() || !Self::password_matches(password, &user) {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidPassword);
        }

        // 3. Issue the access token
        let token = self
            .jwt
            .generate_access_token(user.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        // 4. Resolve the menu tree
        let menus = self.menu_service.menus_for_user(user.id).await?;

        // 5. Update last login
        if let Err(e) = self.user_repo.record_login(user.id, Utc::now().date_naive()).await {
            error!("Failed to update login date: {}", e);
        }

        info!("Login successful for: {}", username);

        Ok(LoginResult {
            user: UserInfo::from(&user),
            token,
            roles: menus.role_names(),
            menu_list: menus.menu_list,
        })
    }

    fn password_matches(password: &str, user: &SysUser) -> bool {
        match PasswordService::verify(password, &user.password) {
            Ok(valid) => valid,
            Err(e) => {
                error!("Stored password hash for user {} is unreadable: {}", user.id, e);
                false
            }
        }
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserInfo,
    pub token: String,
    /// Comma-joined role names.
    pub roles: String,
    pub menu_list: Vec<MenuView>,
}

/// User info returned in the login response
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub email: String,
    pub phonenumber: String,
    pub create_time: Option<NaiveDate>,
}

impl From<&SysUser> for UserInfo {
    fn from(user: &SysUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            phonenumber: user.phonenumber.clone().unwrap_or_default(),
            create_time: user.create_time,
        }
    }
}
