use std::sync::Arc;

use axum::extract::FromRef;

use console_core::services::{AuthService, MenuService, UserService};
use console_security::JwtService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub menu_service: Arc<MenuService>,
    pub user_service: Arc<UserService>,
    pub jwt: Arc<JwtService>,
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<MenuService> {
    fn from_ref(state: &AppState) -> Self {
        state.menu_service.clone()
    }
}

impl FromRef<AppState> for Arc<UserService> {
    fn from_ref(state: &AppState) -> Self {
        state.user_service.clone()
    }
}

impl FromRef<AppState> for Arc<JwtService> {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
