//! Scoring constants for position evaluation
//!
//! Hand-tuned; the mobility term dominates early play while two-in-a-row
//! threats dominate once subboards fill up.

/// Score of a decided game (X won: positive, O won: negative)
pub const WIN_SCORE: i32 = 10_000;

/// Value of a won subboard in a position that is still being scored
pub const BOARD_WIN_SCORE: i32 = 150;

/// Weight of the per-subboard line score
pub const WEIGHT_STRATEGIC: i32 = 2;

/// Weight of the safe-move count
pub const WEIGHT_MOBILITY: i32 = 5;

/// Line with two marks of one side and an empty third cell
pub const TWO_IN_LINE: i32 = 50;

/// Line with one mark and two empty cells
pub const ONE_IN_LINE: i32 = 1;

/// Safe-move counts are centered on 4.5 (stored doubled: 9)
pub const MOBILITY_CENTER_DOUBLED: i32 = 9;

/// Bonus for the side to move when it may play in any subboard
pub const FREE_MOVE_BONUS: i32 = 9 * WEIGHT_MOBILITY;
