//! Role repository trait (port)

use async_trait::async_trait;

use console_shared::UserId;
use crate::domain::Role;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Roles assigned to `user_id`. An empty list is a valid answer.
    async fn list_roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, DomainError>;
}
