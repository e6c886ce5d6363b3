//! Menu tree pipeline: flat grants in, nested client menu out.

pub mod tree;
pub mod serializer;

pub use tree::{build_tree, MenuNode};
pub use serializer::{serialize_forest, MenuView};
