// ============================================================================
// Console Infrastructure - PostgreSQL User Repository
// File: crates/console-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::error;

use console_core::domain::SysUser;
use console_core::error::DomainError;
use console_core::repositories::UserRepository;
use console_shared::UserId;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct SysUserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub login_date: Option<NaiveDate>,
    pub status: Option<i32>,
    pub create_time: Option<NaiveDate>,
    pub update_time: Option<NaiveDate>,
    pub remark: Option<String>,
}

impl From<SysUserRow> for SysUser {
    fn from(row: SysUserRow) -> Self {
        SysUser {
            id: row.id,
            username: row.username,
            password: row.password,
            avatar: row.avatar,
            email: row.email,
            phonenumber: row.phonenumber,
            login_date: row.login_date,
            status: row.status,
            create_time: row.create_time,
            update_time: row.update_time,
            remark: row.remark,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<SysUser>, DomainError> {
        let row: Option<SysUserRow> = sqlx::query_as(
            r#"
            SELECT 
                id, username, password, avatar, email, phonenumber,
                login_date, status, create_time, update_time, remark
            FROM sys_user
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<SysUser>, DomainError> {
        let row: Option<SysUserRow> = sqlx::query_as(
            r#"
            SELECT 
                id, username, password, avatar, email, phonenumber,
                login_date, status, create_time, update_time, remark
            FROM sys_user
            WHERE username = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by username: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sys_user WHERE username = $1)"
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking username: {}", e);
            DomainError::DatabaseError(e.to_string())
        })
    }

    async fn record_login(&self, id: UserId, login_date: NaiveDate) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE sys_user
            SET login_date = $2
            WHERE id = $1
            "#
        )
        .bind(id)
        .bind(login_date)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error recording login: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
