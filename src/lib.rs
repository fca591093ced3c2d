//! Analysis engine for nine-subboard tic-tac-toe
//!
//! The board is a 9x9 grid split into nine 3x3 subboards. Each move marks one
//! cell of the active subboard and sends the opponent to the subboard whose
//! index equals that cell. Completing a line in any subboard wins the game;
//! a subboard that fills up without a line is emptied and play goes on.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board state with per-subboard bitmasks
//! - [`rules`]: Move application, routing and move generation
//! - [`notation`]: 83-digit position text and move-list text
//! - [`eval`]: Static evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`variation`]: Arena-backed variation tree with navigation
//! - [`engine`]: Analysis session owning a searcher and a tree
//! - [`config`]: TOML configuration with environment overrides
//!
//! # Quick Start
//!
//! ```
//! use uttt::{apply_move, AnalysisEngine, BoardState, Searcher};
//!
//! let state = BoardState::new();
//! let outcome = apply_move(&state, 4).unwrap();
//! assert!(!outcome.game_over);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.best_move(&outcome.state, 3);
//! println!("O plays cell {:?}, score {}", result.best_move, result.score);
//!
//! let mut session = AnalysisEngine::new();
//! session.load_move_list("44").unwrap();
//! assert_eq!(session.tree().to_string(), "1.X:5 O:5");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod notation;
pub mod rules;
pub mod search;
pub mod variation;

// Re-export commonly used types for convenience
pub use board::{Active, BoardState, Cell, Mark, Move, SubBoard};
pub use config::{load_config, EngineConfig};
pub use engine::AnalysisEngine;
pub use error::{EngineResult, FormatError, GameError, IllegalMoveReason};
pub use eval::{evaluate, WIN_SCORE};
pub use notation::{decode, encode, replay, INITIAL_POSITION};
pub use rules::{apply_move, apply_move_at, is_terminal, valid_moves, MoveOutcome, RoutingRule, Rules};
pub use search::{SearchResult, Searcher};
pub use variation::{NodeId, VariationTree};
