// ============================================================================
// Console Core - Menu Tree Builder
// File: crates/console-core/src/menu/tree.rs
// Description: Arranges a flat, deduplicated menu set into an ordered forest
// ============================================================================
//! Menu tree construction.
//!
//! Siblings are ordered by `order_num` ascending with unordered items last.
//! Roots are the items whose parent is `0` (or absent). An item whose parent
//! is not in the input is an orphan: it is neither attached nor promoted to a
//! root, so it is absent from the forest. Items on a `parent_id` cycle are
//! never reachable from a root and are dropped the same way.

use tracing::debug;

use console_shared::MenuId;
use crate::domain::MenuItem;

/// A menu item together with its ordered children. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(item: MenuItem) -> Self {
        Self { item, children: Vec::new() }
    }

    pub fn id(&self) -> MenuId {
        self.item.id
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuNode::subtree_len).sum::<usize>()
    }
}

/// Build the menu forest for `items`.
///
/// Equal input yields an equal forest: ties in `order_num` keep their input
/// order, so callers that need set semantics should pass items in a canonical
/// order (the access resolver yields them by ascending id).
pub fn build_tree<I>(items: I) -> Vec<MenuNode>
where
    I: IntoIterator<Item = MenuItem>,
{
    let mut items: Vec<MenuItem> = items.into_iter().collect();
    if items.is_empty() {
        return Vec::new();
    }

    // Stable, so equal keys keep their relative order.
    items.sort_by_key(MenuItem::sort_key);

    // children[i] holds the indices of the direct children of items[i], in sorted order.
    // Roots are never children, even of an item whose id is the root sentinel.
    let children: Vec<Vec<usize>> = items
        .iter()
        .map(|parent| {
            items
                .iter()
                .enumerate()
                .filter(|(_, candidate)| {
                    !candidate.is_root_menu() && candidate.parent() == parent.id
                })
                .map(|(index, _)| index)
                .collect()
        })
        .collect();

    let mut ancestors = Vec::new();
    let forest: Vec<MenuNode> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_root_menu())
        .map(|(index, _)| attach(index, &items, &children, &mut ancestors))
        .collect();

    let placed: usize = forest.iter().map(MenuNode::subtree_len).sum();
    if placed < items.len() {
        let orphans = items
            .iter()
            .filter(|item| !item.is_root_menu() && !items.iter().any(|p| p.id == item.parent()))
            .count();
        debug!(
            total = items.len(),
            placed,
            orphans,
            "Menu items left out of the tree"
        );
    }

    forest
}

fn attach(
    index: usize,
    items: &[MenuItem],
    children: &[Vec<usize>],
    ancestors: &mut Vec<MenuId>,
) -> MenuNode {
    let item = &items[index];
    ancestors.push(item.id);

    let mut nodes = Vec::with_capacity(children[index].len());
    for &child in &children[index] {
        let child_id = items[child].id;
        if ancestors.contains(&child_id) {
            debug!(menu_id = item.id, child_id, "Skipping cyclic menu reference");
            continue;
        }
        nodes.push(attach(child, items, children, ancestors));
    }

    ancestors.pop();
    MenuNode {
        item: item.clone(),
        children: nodes,
    }
}
