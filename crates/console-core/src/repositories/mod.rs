//! Repository traits (ports)

pub mod user_repository;
pub mod role_repository;
pub mod menu_repository;

pub use user_repository::UserRepository;
pub use role_repository::RoleRepository;
pub use menu_repository::MenuRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use role_repository::MockRoleRepository;
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
