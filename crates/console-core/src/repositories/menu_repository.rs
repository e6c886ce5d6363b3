//! Menu repository trait (port)

use async_trait::async_trait;

use console_shared::RoleId;
use crate::domain::MenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Menu items granted to `role_id` through sys_role_menu.
    async fn list_menu_items_for_role(&self, role_id: RoleId) -> Result<Vec<MenuItem>, DomainError>;
}
