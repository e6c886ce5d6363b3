// ============================================================================
// Console Infrastructure - PostgreSQL Menu Repository
// File: crates/console-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use console_core::domain::MenuItem;
use console_core::error::DomainError;
use console_core::repositories::MenuRepository;
use console_shared::RoleId;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SysMenuRow {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub path: Option<String>,
    pub component: Option<String>,
    pub order_num: Option<i32>,
    pub parent_id: Option<i64>,
    pub menu_type: Option<String>,
    pub perms: Option<String>,
}

impl From<SysMenuRow> for MenuItem {
    fn from(row: SysMenuRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            icon: row.icon,
            path: row.path,
            component: row.component,
            order_num: row.order_num,
            parent_id: row.parent_id,
            menu_type: row.menu_type,
            perms: row.perms,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_menu_items_for_role(&self, role_id: RoleId) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<SysMenuRow> = sqlx::query_as(
            r#"
            SELECT
                id, name, icon, path, component,
                order_num, parent_id, menu_type, perms
            FROM sys_menu
            WHERE id IN (SELECT menu_id FROM sys_role_menu WHERE role_id = $1)
            "#
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menus for role {}: {}", role_id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}
