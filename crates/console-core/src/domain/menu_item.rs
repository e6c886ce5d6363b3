// ============================================================================
// Console Core - Menu Item Entity
// File: crates/console-core/src/domain/menu_item.rs
// Description: Navigation menu row as stored in sys_menu
// ============================================================================

use serde::{Deserialize, Serialize};

use console_shared::constants::{ROOT_PARENT_ID, UNORDERED_SORT_KEY};
use console_shared::MenuId;

/// Menu Item entity. Read-only inside the menu pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuId,
    pub name: String,
    pub icon: Option<String>,
    pub path: Option<String>,
    /// Client route target.
    pub component: Option<String>,
    pub order_num: Option<i32>,
    /// `None` and `Some(0)` both mean top level.
    pub parent_id: Option<MenuId>,
    pub menu_type: Option<String>,
    pub perms: Option<String>,
}

impl MenuItem {
    pub fn new(id: MenuId, name: impl Into<String>, parent_id: MenuId, order_num: Option<i32>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            path: None,
            component: None,
            order_num,
            parent_id: Some(parent_id),
            menu_type: None,
            perms: None,
        }
    }

    pub fn parent(&self) -> MenuId {
        self.parent_id.unwrap_or(ROOT_PARENT_ID)
    }

    pub fn is_root_menu(&self) -> bool {
        self.parent() == ROOT_PARENT_ID
    }

    /// Ascending sibling order; a missing `order_num` sorts after every present one.
    pub fn sort_key(&self) -> i64 {
        self.order_num.map(i64::from).unwrap_or(UNORDERED_SORT_KEY)
    }
}
