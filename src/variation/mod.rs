//! Variation tree for post-game analysis
//!
//! An arena of move nodes: the main line is every node's first child, later
//! children are side variations. Nodes refer to parents and children by
//! index, so the tree drops as a unit.

pub mod node;
pub mod render;
pub mod tree;

pub use node::{Node, NodeId};
pub use render::notation;
pub use tree::VariationTree;
