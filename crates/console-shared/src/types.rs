//! Common types

/// Numeric primary key shared by users, roles and menus.
pub type EntityId = i64;
pub type UserId = EntityId;
pub type RoleId = EntityId;
pub type MenuId = EntityId;
