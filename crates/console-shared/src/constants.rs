//! Application-wide constants

/// `parent_id` value marking a top-level menu.
pub const ROOT_PARENT_ID: i64 = 0;
/// Sort key used for menus without an `order_num`; sinks them below every ordered sibling.
pub const UNORDERED_SORT_KEY: i64 = i64::MAX;
/// Serialization stops descending past this many levels.
pub const MAX_MENU_DEPTH: usize = 32;
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 86400;
pub const BEARER_PREFIX: &str = "Bearer ";
