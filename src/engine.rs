//! Analysis session tying the search engine to a variation tree
//!
//! An `AnalysisEngine` owns its configuration, its searcher and one variation
//! tree. Loading a new position or move list discards the tree and builds a
//! fresh one; everything else reads or extends the current tree.
//!
//! # Example
//!
//! ```
//! use uttt::AnalysisEngine;
//!
//! let mut engine = AnalysisEngine::new();
//! engine.load_move_list("40").unwrap();
//! engine.play(1).unwrap();
//!
//! let score = engine.evaluate_current(Some(2));
//! println!("{} after {}", score, engine.tree().move_list(engine.tree().current()));
//! ```

use tracing::info;

use crate::board::BoardState;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::notation::{decode, encode};
use crate::search::{SearchResult, Searcher};
use crate::variation::{NodeId, VariationTree};

/// One analysis session.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: EngineConfig,
    searcher: Searcher,
    /// Position the tree is rooted at
    base: BoardState,
    tree: VariationTree,
}

impl AnalysisEngine {
    /// Create a session with default settings, rooted at the starting position.
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        let rules = config.rules();
        let base = BoardState::new();
        Self {
            searcher: Searcher::with_rules(rules),
            tree: VariationTree::with_rules(base, rules),
            base,
            config,
        }
    }

    /// Create a session from a configuration.
    ///
    /// Fails if the configured start position does not decode.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        let rules = config.rules();
        let base = config.start_state()?;
        Ok(Self {
            searcher: Searcher::with_rules(rules),
            tree: VariationTree::with_rules(base, rules),
            base,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn tree(&self) -> &VariationTree {
        &self.tree
    }

    /// Mutable tree access for navigation and branching
    #[inline]
    pub fn tree_mut(&mut self) -> &mut VariationTree {
        &mut self.tree
    }

    #[inline]
    pub fn base(&self) -> &BoardState {
        &self.base
    }

    /// Replace the tree with an empty one rooted at `text`.
    ///
    /// On error the session is left unchanged.
    pub fn load_position(&mut self, text: &str) -> EngineResult<()> {
        let base = decode(text)?;
        self.base = base;
        self.tree = VariationTree::with_rules(base, self.config.rules());
        info!(winner = ?base.winner(), "position loaded");
        Ok(())
    }

    /// Replace the tree with the chain built from `text`, played from the
    /// current base position. The cursor ends on the last move.
    ///
    /// On error the session is left unchanged.
    pub fn load_move_list(&mut self, text: &str) -> EngineResult<()> {
        let tree = VariationTree::from_move_list(self.base, text, self.config.rules())?;
        info!(
            moves = tree.depth(tree.current()),
            winner = ?tree.current_node().state().winner(),
            "move list loaded"
        );
        self.tree = tree;
        Ok(())
    }

    /// Play `cell` at the cursor, reusing an existing branch when present.
    pub fn play(&mut self, cell: u8) -> EngineResult<NodeId> {
        self.tree.play(cell)
    }

    /// Position at the cursor
    #[inline]
    pub fn current_state(&self) -> &BoardState {
        self.tree.current_node().state()
    }

    /// Cursor position as 83-digit text
    pub fn current_position(&self) -> EngineResult<String> {
        encode(self.current_state())
    }

    /// Search the cursor position. `None` uses the configured depth.
    pub fn evaluate_current(&mut self, depth: Option<u8>) -> i32 {
        let depth = depth.unwrap_or(self.config.search_depth);
        let state = *self.current_state();
        self.searcher.get_evaluation(&state, depth)
    }

    /// Best move at the cursor. `None` uses the configured depth.
    pub fn best_move(&mut self, depth: Option<u8>) -> SearchResult {
        let depth = depth.unwrap_or(self.config.search_depth);
        let state = *self.current_state();
        self.searcher.best_move(&state, depth)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
