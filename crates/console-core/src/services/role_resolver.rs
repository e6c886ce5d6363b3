//! Role resolution: which roles does a user hold?

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tracing::debug;

use console_shared::{RoleId, UserId};
use crate::domain::Role;
use crate::error::DomainError;
use crate::repositories::RoleRepository;

pub struct RoleResolver {
    role_repo: Arc<dyn RoleRepository>,
}

impl RoleResolver {
    pub fn new(role_repo: Arc<dyn RoleRepository>) -> Self {
        Self { role_repo }
    }

    /// Roles assigned to `user_id`, first occurrence wins on duplicate ids.
    /// The caller guarantees the user exists.
    pub async fn assigned_roles(&self, user_id: UserId) -> Result<Vec<Role>, DomainError> {
        let mut seen = HashSet::new();
        let roles: Vec<Role> = self
            .role_repo
            .list_roles_for_user(user_id)
            .await?
            .into_iter()
            .filter(|role| seen.insert(role.id))
            .collect();

        debug!(user_id, count = roles.len(), "Resolved roles");
        Ok(roles)
    }

    pub async fn resolve_roles(&self, user_id: UserId) -> Result<BTreeSet<RoleId>, DomainError> {
        Ok(role_ids(&self.assigned_roles(user_id).await?))
    }
}

pub fn role_ids(roles: &[Role]) -> BTreeSet<RoleId> {
    roles.iter().map(|role| role.id).collect()
}
