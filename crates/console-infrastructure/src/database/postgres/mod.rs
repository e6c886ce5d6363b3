//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod role_repo_impl;
pub mod menu_repo_impl;

pub use user_repo_impl::PgUserRepository;
pub use role_repo_impl::PgRoleRepository;
pub use menu_repo_impl::PgMenuRepository;
