//! Menu access resolution: union of the menus granted to a role set.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::debug;

use console_shared::{MenuId, RoleId};
use crate::domain::MenuItem;
use crate::error::DomainError;
use crate::repositories::MenuRepository;

pub struct MenuAccessResolver {
    menu_repo: Arc<dyn MenuRepository>,
}

impl MenuAccessResolver {
    pub fn new(menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self { menu_repo }
    }

    /// Every menu granted by at least one of `role_ids`, once per id,
    /// ascending by id. The first fetch of an id is the one kept.
    pub async fn resolve_menus(
        &self,
        role_ids: &BTreeSet<RoleId>,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let mut granted: BTreeMap<MenuId, MenuItem> = BTreeMap::new();

        for &role_id in role_ids {
            let menus = self.menu_repo.list_menu_items_for_role(role_id).await?;
            debug!(role_id, count = menus.len(), "Fetched role menu grants");
            for menu in menus {
                granted.entry(menu.id).or_insert(menu);
            }
        }

        Ok(granted.into_values().collect())
    }
}
