//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
    /// Directory served read-only under `/media`.
    pub media_root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
    pub json: bool,
    /// When set, logs are also written to a daily rolling file here.
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Ok(Self::builder(&env)?.build()?.try_deserialize()?)
    }

    fn builder(
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "console-server")?
            .set_default("app.cors_origin", "http://localhost:5173")?
            .set_default("app.media_root", "media")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.run_migrations", false)?
            .set_default(
                "jwt.access_token_expiry",
                crate::constants::DEFAULT_ACCESS_TOKEN_EXPIRY,
            )?
            .set_default("log.level", "info")?
            .set_default("log.json", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            ))
    }
}
