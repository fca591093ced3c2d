//! Game rules for subboard tic-tac-toe
//!
//! This module implements the rule set:
//! - Line detection on a single 3x3 subboard
//! - Move application (subboard wins, recycling of drawn subboards, routing)
//! - Legal move generation and the terminal test
//!
//! Unlike classical ultimate tic-tac-toe, the game ends as soon as any
//! subboard is won.

pub mod lines;
pub mod moves;

// Re-exports for convenient access
pub use lines::{find_winner, has_two_in_a_row_threat, line_counts, LINE_MASKS};
pub use moves::{
    apply_move, apply_move_at, is_terminal, valid_moves, MoveOutcome, RoutingRule, Rules,
    ValidMoves,
};
