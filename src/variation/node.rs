//! Variation tree nodes
//!
//! Each node is a position reached by one move from its parent. Parent and
//! children are arena indices, never references.

use crate::board::{BoardState, Mark, Move};

/// Index into the node arena.
///
/// Only the tree that owns the arena hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root of every tree
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the variation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Move and mark that produced this node (None for root)
    pub(crate) played: Option<(Move, Mark)>,

    /// Position after the move
    pub(crate) state: BoardState,

    /// Mark that won a subboard with this move, or the winner of a decided
    /// root position
    pub(crate) winner: Option<Mark>,

    /// Parent node index (None for root)
    pub(crate) parent: Option<NodeId>,

    /// Children in insertion order; index 0 is the main line
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new_root(state: BoardState) -> Self {
        Self {
            played: None,
            state,
            winner: state.winner(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn new_child(
        parent: NodeId,
        mv: Move,
        mark: Mark,
        state: BoardState,
        winner: Option<Mark>,
    ) -> Self {
        Self {
            played: Some((mv, mark)),
            state,
            winner,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Move that led here
    #[inline]
    pub fn mv(&self) -> Option<Move> {
        self.played.map(|(mv, _)| mv)
    }

    /// Mark that made the move
    #[inline]
    pub fn mark(&self) -> Option<Mark> {
        self.played.map(|(_, mark)| mark)
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True when this node's move won the game for its mover
    #[inline]
    pub fn is_winning_move(&self) -> bool {
        self.winner.is_some() && self.winner == self.mark()
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Main-line continuation
    #[inline]
    pub fn main_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }
}
