// ============================================================================
// Console Infrastructure - PostgreSQL Role Repository
// File: crates/console-infrastructure/src/database/postgres/role_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use console_core::domain::Role;
use console_core::error::DomainError;
use console_core::repositories::RoleRepository;
use console_shared::UserId;

pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SysRoleRow {
    pub id: i64,
    pub name: String,
}

impl From<SysRoleRow> for Role {
    fn from(row: SysRoleRow) -> Self {
        Role::new(row.id, row.name)
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn list_roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, DomainError> {
        let rows: Vec<SysRoleRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM sys_role
            WHERE id IN (SELECT role_id FROM sys_user_role WHERE user_id = $1)
            ORDER BY id
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing roles for user {}: {}", user_id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}
