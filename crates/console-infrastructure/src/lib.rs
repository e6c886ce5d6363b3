//! # Console Infrastructure
//! 
//! PostgreSQL implementations of the console repository traits (adapters).

pub mod database;

pub use database::{create_pool, run_migrations, PgMenuRepository, PgRoleRepository, PgUserRepository};
