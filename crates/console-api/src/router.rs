//! Route table.
//!
//! `/health` and `/user/login` are public; every other route requires a
//! valid access token.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, user};
use crate::middleware::require_token;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes (no token)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/user/login", post(auth::login));

    // Protected routes
    let protected_routes = Router::new()
        .route("/user/menus", get(user::menus))
        .route("/user/action", get(user::get_user))
        .route("/user/check", post(user::check_username))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use console_core::domain::{MenuItem, Role, SysUser};
    use console_core::repositories::{MenuRepository, RoleRepository, UserRepository};
    use console_core::services::{AuthService, MenuService, UserService};
    use console_core::DomainError;
    use console_security::{JwtService, PasswordService};
    use console_shared::{RoleId, UserId};

    #[derive(Default)]
    struct FakeStore {
        users: Vec<SysUser>,
        roles: HashMap<UserId, Vec<Role>>,
        grants: HashMap<RoleId, Vec<MenuItem>>,
    }

    #[async_trait]
    impl UserRepository for FakeStore {
        async fn find_by_id(&self, id: UserId) -> Result<Option<SysUser>, DomainError> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<SysUser>, DomainError> {
            Ok(self.users.iter().find(|u| u.username == username).cloned())
        }

        async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
            Ok(self.users.iter().any(|u| u.username == username))
        }

        async fn record_login(&self, _id: UserId, _date: NaiveDate) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[async_trait]
    impl RoleRepository for FakeStore {
        async fn list_roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, DomainError> {
            Ok(self.roles.get(&user_id).cloned().unwrap_or_default())
        }
    }

    #[async_trait]
    impl MenuRepository for FakeStore {
        async fn list_menu_items_for_role(&self, role_id: RoleId) -> Result<Vec<MenuItem>, DomainError> {
            Ok(self.grants.get(&role_id).cloned().unwrap_or_default())
        }
    }

    fn store() -> FakeStore {
        let mut admin = SysUser::new(1, "admin", PasswordService::hash("123456").unwrap());
        admin.email = Some("admin@example.com".into());
        admin.phonenumber = Some("13800000000".into());
        admin.create_time = NaiveDate::from_ymd_opt(2024, 5, 1);
        let guest = SysUser::new(2, "guest", PasswordService::hash("guest").unwrap());

        let mut users_menu = MenuItem::new(3, "Users", 1, Some(1));
        users_menu.path = Some("/sys/user".into());
        users_menu.component = Some("sys/user/index".into());

        let mut store = FakeStore {
            users: vec![admin, guest],
            ..FakeStore::default()
        };
        store.roles.insert(1, vec![Role::new(1, "admin"), Role::new(2, "common")]);
        store.grants.insert(
            1,
            vec![
                MenuItem::new(1, "System", 0, Some(2)),
                users_menu.clone(),
                MenuItem::new(4, "Roles", 1, Some(2)),
            ],
        );
        store.grants.insert(
            2,
            vec![
                MenuItem::new(2, "Dashboard", 0, Some(1)),
                users_menu,
                MenuItem::new(9, "Orphan", 77, None),
            ],
        );
        store
    }

    fn app() -> (Router, Arc<JwtService>) {
        let store = Arc::new(store());
        let jwt = Arc::new(JwtService::new("test-secret", 3600));
        let menu_service = Arc::new(MenuService::new(store.clone(), store.clone()));

        let state = AppState {
            auth_service: Arc::new(AuthService::new(store.clone(), menu_service.clone(), jwt.clone())),
            menu_service,
            user_service: Arc::new(UserService::new(store)),
            jwt: jwt.clone(),
        };
        (build_router(state), jwt)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_token(uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_returns_token_and_menu_tree() {
        let (app, jwt) = app();
        let (status, body) = send(
            app,
            post_json("/user/login", json!({"username": "admin", "password": "123456"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["info"], "Login successful");
        assert_eq!(body["roles"], "admin,common");
        assert_eq!(jwt.authenticate(body["token"].as_str().unwrap()).unwrap(), 1);
        assert_eq!(
            body["userInfo"],
            json!({
                "id": 1,
                "username": "admin",
                "avatar": "",
                "email": "admin@example.com",
                "phonenumber": "13800000000",
                "create_time": "2024-05-01"
            })
        );
        assert_eq!(
            body["menuList"],
            json!([
                {"id": 2, "name": "Dashboard", "icon": "", "path": "", "order_num": 1, "children": []},
                {"id": 1, "name": "System", "icon": "", "path": "", "order_num": 2, "children": [
                    {"id": 3, "name": "Users", "icon": "", "path": "/sys/user",
                     "component": "sys/user/index", "order_num": 1, "children": []},
                    {"id": 4, "name": "Roles", "icon": "", "path": "", "order_num": 2, "children": []}
                ]}
            ])
        );
    }

    #[tokio::test]
    async fn test_login_accepts_query_parameters() {
        let (app, _) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/user/login?username=guest&password=guest")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roles"], "");
        assert_eq!(body["menuList"], json!([]));
    }

    #[tokio::test]
    async fn test_login_failures() {
        let (app, _) = app();

        let (status, body) = send(
            app.clone(),
            post_json("/user/login", json!({"username": "admin", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"code": 401, "info": "Incorrect password"}));

        let (status, body) = send(
            app.clone(),
            post_json("/user/login", json!({"username": "ghost", "password": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["info"], "Username does not exist");

        let malformed = Request::builder()
            .method(Method::POST)
            .uri("/user/login")
            .body(Body::from("username=admin"))
            .unwrap();
        let (status, body) = send(app, malformed).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_login_blank_credentials_are_auth_failures() {
        let (app, _) = app();

        let (status, body) = send(
            app.clone(),
            post_json("/user/login", json!({"username": "admin", "password": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"code": 401, "info": "Incorrect password"}));

        let (status, body) = send(
            app,
            post_json("/user/login", json!({"username": "", "password": "123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"code": 401, "info": "Username does not exist"}));
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let (app, _) = app();
        let request = Request::builder().uri("/user/menus").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["info"], "Please log in to obtain a token");
    }

    #[tokio::test]
    async fn test_expired_and_invalid_tokens() {
        let (app, _) = app();
        let expired = JwtService::new("test-secret", -3600).generate_access_token(1).unwrap();

        let (status, body) = send(app.clone(), get_with_token("/user/menus", &expired)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["info"], "Token expired, please log in again");

        let (status, body) = send(app, get_with_token("/user/menus", "garbage")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["info"], "Token verification failed");
    }

    #[tokio::test]
    async fn test_menus_for_token_subject() {
        let (app, jwt) = app();
        let token = jwt.generate_access_token(1).unwrap();

        let (status, body) = send(app, get_with_token("/user/menus", &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roles"], "admin,common");
        let roots: Vec<i64> = body["menuList"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_i64().unwrap())
            .collect();
        assert_eq!(roots, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let (app, jwt) = app();
        let token = jwt.generate_access_token(1).unwrap();

        let (status, body) = send(app.clone(), get_with_token("/user/action?id=2", &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "guest");
        assert!(body["user"].get("password").is_none());

        let (status, body) = send(app.clone(), get_with_token("/user/action?id=42", &token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["info"], "User does not exist");

        let (status, _) = send(app, get_with_token("/user/action", &token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_username_check() {
        let (app, jwt) = app();
        let token = jwt.generate_access_token(1).unwrap();
        let check = |username: &str| {
            let mut request = post_json("/user/check", json!({ "username": username }));
            request.headers_mut().insert(
                header::AUTHORIZATION,
                format!("Bearer {}", token).parse().unwrap(),
            );
            request
        };

        let (status, body) = send(app.clone(), check("admin")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["info"], "Username already exists");

        let (status, body) = send(app.clone(), check("editor")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"], "Username is available");

        let (status, _) = send(app.clone(), check("")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(app, check(&"x".repeat(101))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let (app, _) = app();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
