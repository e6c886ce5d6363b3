//! Menu tree serialization.
//!
//! Turns a [`MenuNode`] forest into the nested shape the console client
//! renders. Every level carries a `children` array, empty for leaves.

use serde::Serialize;
use tracing::warn;

use console_shared::constants::MAX_MENU_DEPTH;
use console_shared::MenuId;
use crate::menu::tree::MenuNode;

/// Client-facing menu node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub id: MenuId,
    pub name: String,
    pub icon: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perms: Option<String>,
    pub children: Vec<MenuView>,
}

pub fn serialize_forest(forest: &[MenuNode]) -> Vec<MenuView> {
    let mut ancestors = Vec::new();
    forest
        .iter()
        .map(|node| serialize_node(node, 1, &mut ancestors))
        .collect()
}

/// Descends until `MAX_MENU_DEPTH` or a repeated id on the current path;
/// at that point the node is emitted with empty `children`.
fn serialize_node(node: &MenuNode, depth: usize, ancestors: &mut Vec<MenuId>) -> MenuView {
    let item = &node.item;

    let children = if depth >= MAX_MENU_DEPTH || ancestors.contains(&item.id) {
        if !node.children.is_empty() {
            warn!(menu_id = item.id, depth, "Truncating menu subtree");
        }
        Vec::new()
    } else {
        ancestors.push(item.id);
        let children = node
            .children
            .iter()
            .map(|child| serialize_node(child, depth + 1, ancestors))
            .collect();
        ancestors.pop();
        children
    };

    MenuView {
        id: item.id,
        name: item.name.clone(),
        icon: item.icon.clone().unwrap_or_default(),
        path: item.path.clone().unwrap_or_default(),
        component: item.component.clone(),
        order_num: item.order_num,
        menu_type: item.menu_type.clone(),
        perms: item.perms.clone(),
        children,
    }
}
