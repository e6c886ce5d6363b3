//! Menu pipeline: roles → granted menus → tree → client view.

use std::sync::Arc;

use tracing::debug;

use console_shared::UserId;
use crate::domain::Role;
use crate::error::DomainError;
use crate::menu::{build_tree, serialize_forest, MenuView};
use crate::repositories::{MenuRepository, RoleRepository};
use crate::services::menu_access::MenuAccessResolver;
use crate::services::role_resolver::{role_ids, RoleResolver};

/// Result of running the pipeline for one user
#[derive(Debug, Clone)]
pub struct UserMenus {
    pub roles: Vec<Role>,
    pub menu_list: Vec<MenuView>,
}

impl UserMenus {
    /// Role names joined with `,` in resolution order.
    pub fn role_names(&self) -> String {
        self.roles
            .iter()
            .map(|role| role.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub struct MenuService {
    roles: RoleResolver,
    menus: MenuAccessResolver,
}

impl MenuService {
    pub fn new(role_repo: Arc<dyn RoleRepository>, menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self {
            roles: RoleResolver::new(role_repo),
            menus: MenuAccessResolver::new(menu_repo),
        }
    }

    /// Fails on the first data-access error; nothing is retried.
    pub async fn menus_for_user(&self, user_id: UserId) -> Result<UserMenus, DomainError> {
        let roles = self.roles.assigned_roles(user_id).await?;
        let items = self.menus.resolve_menus(&role_ids(&roles)).await?;
        let granted = items.len();

        let forest = build_tree(items);
        let menu_list = serialize_forest(&forest);

        debug!(user_id, granted, roots = menu_list.len(), "Built menu tree");
        Ok(UserMenus { roles, menu_list })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;
    use crate::repositories::{MockMenuRepository, MockRoleRepository};

    fn service(roles: Vec<Role>) -> MenuService {
        let mut role_repo = MockRoleRepository::new();
        role_repo
            .expect_list_roles_for_user()
            .returning(move |_| Ok(roles.clone()));

        let mut menu_repo = MockMenuRepository::new();
        menu_repo.expect_list_menu_items_for_role().returning(|role_id| {
            Ok(match role_id {
                1 => vec![
                    MenuItem::new(1, "System", 0, Some(1)),
                    MenuItem::new(2, "Users", 1, Some(1)),
                    MenuItem::new(3, "Roles", 1, Some(2)),
                ],
                2 => vec![
                    MenuItem::new(1, "System", 0, Some(1)),
                    MenuItem::new(4, "Dashboard", 0, Some(0)),
                    MenuItem::new(9, "Stray", 42, None),
                ],
                _ => Vec::new(),
            })
        });

        MenuService::new(Arc::new(role_repo), Arc::new(menu_repo))
    }

    #[tokio::test]
    async fn test_overlapping_roles_build_one_tree() {
        let menus = service(vec![Role::new(1, "admin"), Role::new(2, "editor")])
            .menus_for_user(1)
            .await
            .unwrap();

        assert_eq!(menus.role_names(), "admin,editor");
        let roots: Vec<_> = menus.menu_list.iter().map(|m| m.id).collect();
        assert_eq!(roots, vec![4, 1]);
        let system: Vec<_> = menus.menu_list[1].children.iter().map(|m| m.id).collect();
        assert_eq!(system, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_user_without_roles_gets_empty_menu() {
        let menus = service(Vec::new()).menus_for_user(1).await.unwrap();
        assert!(menus.roles.is_empty());
        assert!(menus.menu_list.is_empty());
        assert_eq!(menus.role_names(), "");
    }
}
