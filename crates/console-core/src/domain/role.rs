// ============================================================================
// Console Core - Role Entity
// File: crates/console-core/src/domain/role.rs
// Description: Role granted to users through sys_user_role
// ============================================================================

use serde::{Deserialize, Serialize};

use console_shared::RoleId;

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
