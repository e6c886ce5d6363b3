//! Domain services (business logic)

pub mod auth_service;
pub mod menu_access;
pub mod menu_service;
pub mod role_resolver;
pub mod user_service;

pub use auth_service::{AuthService, LoginResult, UserInfo};
pub use menu_access::MenuAccessResolver;
pub use menu_service::{MenuService, UserMenus};
pub use role_resolver::RoleResolver;
pub use user_service::UserService;
