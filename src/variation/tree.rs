//! Variation tree with arena allocation.
//!
//! Nodes live in a contiguous Vec and refer to each other by `NodeId`. The
//! tree also carries a cursor (the current node) for navigation; moving the
//! cursor never changes the tree's shape. Nodes are never removed, the whole
//! tree is dropped and rebuilt when a new position is loaded.

use tracing::trace;

use crate::board::{Active, BoardState, Move};
use crate::error::{EngineResult, GameError, IllegalMoveReason};
use crate::notation::{encode_move_list, parse_move_list};
use crate::rules::{is_terminal, Rules};

use super::node::{Node, NodeId};

/// Branching record of analysed move sequences.
#[derive(Debug, Clone)]
pub struct VariationTree {
    /// Arena storing all nodes; index 0 is the root
    nodes: Vec<Node>,

    /// Cursor
    current: NodeId,

    rules: Rules,
}

impl VariationTree {
    /// Create a tree rooted at `base` under strict routing.
    pub fn new(base: BoardState) -> Self {
        Self::with_rules(base, Rules::default())
    }

    pub fn with_rules(base: BoardState, rules: Rules) -> Self {
        Self {
            nodes: vec![Node::new_root(base)],
            current: NodeId::ROOT,
            rules,
        }
    }

    /// Build a linear chain from move-list text.
    ///
    /// Moves after the first game-ending move are ignored. The cursor is
    /// left on the last node added.
    pub fn from_move_list(base: BoardState, text: &str, rules: Rules) -> EngineResult<Self> {
        let mut tree = Self::with_rules(base, rules);
        let last = tree.add_move_list(NodeId::ROOT, text)?;
        tree.current = last;
        Ok(tree)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn current(&self) -> NodeId {
        self.current
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get a node by ID.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn current_node(&self) -> &Node {
        self.node(self.current)
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true after construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child of `parent` reached by `mv`, if already recorded.
    pub fn find_child(&self, parent: NodeId, mv: Move) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.node(child).mv() == Some(mv))
    }

    /// Play `cell` in the active subboard of `parent`.
    pub fn add_move(&mut self, parent: NodeId, cell: u8) -> EngineResult<NodeId> {
        let Active::Board(board) = self.node(parent).state().active else {
            return Err(GameError::illegal(IllegalMoveReason::WrongSubBoard));
        };
        self.add_move_at(parent, Move { board, cell })
    }

    /// Record `mv` below `parent`.
    ///
    /// An existing child with the same move is returned unchanged. Otherwise
    /// the move is applied to the parent's position and the new node is
    /// appended as the last child.
    pub fn add_move_at(&mut self, parent: NodeId, mv: Move) -> EngineResult<NodeId> {
        if let Some(existing) = self.find_child(parent, mv) {
            return Ok(existing);
        }

        let state = *self.node(parent).state();
        if is_terminal(&state) {
            return Err(GameError::GameAlreadyOver);
        }
        let outcome = self.rules.apply_move_at(&state, mv)?;

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new_child(
            parent,
            mv,
            state.to_move,
            outcome.state,
            outcome.sub_board_winner,
        ));
        self.nodes[parent.index()].children.push(id);

        trace!(
            parent = parent.index(),
            node = id.index(),
            board = mv.board,
            cell = mv.cell,
            branch = self.children(parent).len() - 1,
            "variation node added"
        );
        Ok(id)
    }

    /// Play a whole move list below `from`, reusing existing branches.
    ///
    /// Stops quietly at the first game-ending move. Illegal moves are
    /// reported with their 1-based ply in the list. Returns the last node.
    pub fn add_move_list(&mut self, from: NodeId, text: &str) -> EngineResult<NodeId> {
        let mut node = from;
        for (index, cell) in parse_move_list(text)?.into_iter().enumerate() {
            if is_terminal(self.node(node).state()) {
                break;
            }
            node = self
                .add_move(node, cell)
                .map_err(|e| e.at_ply(index + 1))?;
        }
        Ok(node)
    }

    /// Play `cell` at the cursor and move the cursor to the result.
    pub fn play(&mut self, cell: u8) -> EngineResult<NodeId> {
        let id = self.add_move(self.current, cell)?;
        self.current = id;
        Ok(id)
    }

    /// Nodes from the root's child down to `id`; empty for the root.
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.depth(id));
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            path.push(node);
            node = parent;
        }
        path.reverse();
        path
    }

    /// Principal continuation from the root.
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut node = self.root();
        while let Some(child) = self.node(node).main_child() {
            line.push(child);
            node = child;
        }
        line
    }

    /// Number of moves from the root to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            depth += 1;
            node = parent;
        }
        depth
    }

    /// The path to `id` as move-list text.
    pub fn move_list(&self, id: NodeId) -> String {
        encode_move_list(
            self.path_from_root(id)
                .into_iter()
                .filter_map(|node| self.node(node).mv())
                .map(|mv| mv.cell),
        )
    }

    /// True when every step from the root to `id` takes child 0.
    pub fn is_main_line(&self, id: NodeId) -> bool {
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            if self.node(parent).main_child() != Some(node) {
                return false;
            }
            node = parent;
        }
        true
    }

    // Navigation

    pub fn go_to(&mut self, id: NodeId) {
        debug_assert!(id.index() < self.nodes.len(), "node from another tree");
        self.current = id;
    }

    pub fn go_to_first(&mut self) {
        self.current = self.root();
    }

    /// Follow child 0 from the cursor to the deepest main-line descendant.
    pub fn go_to_last(&mut self) {
        while let Some(child) = self.current_node().main_child() {
            self.current = child;
        }
    }

    /// Returns false at the root.
    pub fn go_to_parent(&mut self) -> bool {
        match self.current_node().parent() {
            Some(parent) => {
                self.current = parent;
                true
            }
            None => false,
        }
    }

    /// Returns false at a leaf.
    pub fn go_to_main_line_child(&mut self) -> bool {
        match self.current_node().main_child() {
            Some(child) => {
                self.current = child;
                true
            }
            None => false,
        }
    }
}
