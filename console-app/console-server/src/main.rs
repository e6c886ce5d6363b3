use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use console_api::{build_router, AppState};
use console_core::services::{AuthService, MenuService, UserService};
use console_infrastructure::database::{self, PgMenuRepository, PgRoleRepository, PgUserRepository};
use console_security::JwtService;
use console_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry
    let _log_guard = console_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = database::create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        if let Err(e) = database::run_migrations(&pool).await {
            error!("Failed to run migrations: {}", e);
            return Err(e.into());
        }
        info!("Migrations applied.");
    }

    // Wire repositories into services
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let role_repo = Arc::new(PgRoleRepository::new(pool.clone()));
    let menu_repo = Arc::new(PgMenuRepository::new(pool));

    let jwt = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let menu_service = Arc::new(MenuService::new(role_repo, menu_repo));

    // Create App State
    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            user_repo.clone(),
            menu_service.clone(),
            jwt.clone(),
        )),
        menu_service,
        user_service: Arc::new(UserService::new(user_repo)),
        jwt,
    };

    let cors_origin: HeaderValue = config.app.cors_origin.parse()?;

    // Build router
    let app = build_router(state)
        // Uploaded media, public like login
        .nest_service("/media", ServeDir::new(&config.app.media_root))
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
