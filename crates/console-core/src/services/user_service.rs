//! User lookups backing the protected user endpoints

use std::sync::Arc;

use tracing::warn;

use console_shared::UserId;
use crate::domain::SysUser;
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_user(&self, id: UserId) -> Result<SysUser, DomainError> {
        self.user_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found: {}", id);
            DomainError::UserNotFound(id)
        })
    }

    /// `true` when no user has `username` yet.
    pub async fn is_username_available(&self, username: &str) -> Result<bool, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::ValidationError("Username must not be empty".into()));
        }
        Ok(!self.user_repo.username_exists(username).await?)
    }
}
