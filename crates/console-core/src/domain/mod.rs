//! # Console Core - Domain Module
//! 
//! Domain entities for the RBAC console.

pub mod menu_item;
pub mod role;
pub mod user;

// Re-export all entities
pub use menu_item::MenuItem;
pub use role::Role;
pub use user::SysUser;
