//! Evaluation module for subboard tic-tac-toe positions
//!
//! This module provides the static scoring used at search leaves.
//! The evaluation considers:
//! - Decided games and won subboards
//! - Line patterns (two and one in a line) per subboard
//! - Mobility, counted as moves that avoid feeding an opponent threat
//! - The free-move bonus

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, safe_moves, strategic_score};
pub use weights::WIN_SCORE;
