//! User repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;

use console_shared::UserId;
use crate::domain::SysUser;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<SysUser>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<SysUser>, DomainError>;
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError>;
    async fn record_login(&self, id: UserId, login_date: NaiveDate) -> Result<(), DomainError>;
}
