//! Heuristic evaluation function for subboard tic-tac-toe positions
//!
//! The score is the difference of two per-side totals built from:
//! - Won subboards
//! - Strategic line score of every undecided subboard
//! - Mobility: empty cells that do not send the opponent into a subboard
//!   where they already threaten to complete a line
//! - A bonus for the side to move when it may play anywhere

use crate::board::{Active, BoardState, Mark, SubBoard, SUB_BOARDS};
use crate::rules::{has_two_in_a_row_threat, is_terminal, line_counts, LINE_MASKS};

use super::weights::{
    BOARD_WIN_SCORE, FREE_MOVE_BONUS, MOBILITY_CENTER_DOUBLED, ONE_IN_LINE, TWO_IN_LINE,
    WEIGHT_MOBILITY, WEIGHT_STRATEGIC, WIN_SCORE,
};

/// Per-side totals in half points
///
/// Mobility is centered on 4.5, so totals are kept doubled to stay exact.
/// The 4.5 offsets cancel in the difference, which is always even.
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    x: i32,
    o: i32,
}

impl Totals {
    #[inline]
    fn add(&mut self, mark: Mark, doubled: i32) {
        match mark {
            Mark::X => self.x += doubled,
            Mark::O => self.o += doubled,
        }
    }

    #[inline]
    fn difference(self) -> i32 {
        let diff = self.x - self.o;
        debug_assert!(diff % 2 == 0, "mobility offsets must cancel");
        diff / 2
    }
}

/// Evaluate a position.
///
/// Positive values favour X, negative values favour O. A decided game
/// scores `±WIN_SCORE`.
///
/// Swapping every mark and the side to move negates the score.
#[must_use]
pub fn evaluate(state: &BoardState) -> i32 {
    if is_terminal(state) {
        return match state.winner() {
            Some(Mark::X) => WIN_SCORE,
            Some(Mark::O) => -WIN_SCORE,
            None => 0,
        };
    }

    let mut totals = Totals::default();

    for index in 0..SUB_BOARDS as u8 {
        let board = state.sub_board(index);
        if let Some(winner) = board.result() {
            totals.add(winner, 2 * BOARD_WIN_SCORE);
            continue;
        }

        let strategic = strategic_score(board);
        if strategic > 0 {
            totals.add(Mark::X, 2 * strategic * WEIGHT_STRATEGIC);
        } else {
            totals.add(Mark::O, -2 * strategic * WEIGHT_STRATEGIC);
        }

        for mark in [Mark::X, Mark::O] {
            let safe = safe_moves(state, index, mark) as i32;
            totals.add(mark, (2 * safe - MOBILITY_CENTER_DOUBLED) * WEIGHT_MOBILITY);
        }
    }

    if state.active == Active::Any {
        totals.add(state.to_move, 2 * FREE_MOVE_BONUS);
    }

    totals.difference()
}

/// Line score of one subboard, positive for X.
///
/// Each line with two marks of one side and an empty third cell is worth
/// `TWO_IN_LINE`; a single mark with two empty cells is worth `ONE_IN_LINE`.
pub fn strategic_score(board: &SubBoard) -> i32 {
    LINE_MASKS
        .iter()
        .map(|&line| match line_counts(board, line) {
            (2, 0) => TWO_IN_LINE,
            (0, 2) => -TWO_IN_LINE,
            (1, 0) => ONE_IN_LINE,
            (0, 1) => -ONE_IN_LINE,
            _ => 0,
        })
        .sum()
}

/// Empty cells of subboard `index` whose destination subboard holds no
/// two-in-a-row threat for the opponent of `mark`.
pub fn safe_moves(state: &BoardState, index: u8, mark: Mark) -> u32 {
    let board = state.sub_board(index);
    if board.is_decided() {
        return 0;
    }
    let opponent = mark.opponent();
    let mut empty = board.empty_mask();
    let mut count = 0;
    while empty != 0 {
        let cell = empty.trailing_zeros() as u8;
        empty &= empty - 1;
        if !has_two_in_a_row_threat(state.sub_board(cell), opponent) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::rules::apply_move;

    fn state_with(x: &[(u8, u8)], o: &[(u8, u8)], to_move: Mark, active: Active) -> BoardState {
        let mut state = BoardState::empty(to_move, active);
        for &(b, c) in x {
            state.place(Move::new(b, c), Mark::X);
        }
        for &(b, c) in o {
            state.place(Move::new(b, c), Mark::O);
        }
        state.refresh_results();
        state
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&BoardState::new()), 0);
    }

    #[test]
    fn test_free_move_bonus() {
        let x_to_move = BoardState::empty(Mark::X, Active::Any);
        assert_eq!(evaluate(&x_to_move), FREE_MOVE_BONUS);

        let o_to_move = BoardState::empty(Mark::O, Active::Any);
        assert_eq!(evaluate(&o_to_move), -FREE_MOVE_BONUS);
    }

    #[test]
    fn test_terminal_scores() {
        let x_won = state_with(&[(0, 0), (0, 1), (0, 2)], &[], Mark::O, Active::Board(2));
        assert_eq!(evaluate(&x_won), WIN_SCORE);

        let o_won = state_with(&[], &[(8, 2), (8, 4), (8, 6)], Mark::X, Active::Board(6));
        assert_eq!(evaluate(&o_won), -WIN_SCORE);
    }

    #[test]
    fn test_strategic_score_lines() {
        let mut board = SubBoard::new();
        board.place(4, Mark::X);
        // Center lies on 4 lines: middle row, middle column, both diagonals
        assert_eq!(strategic_score(&board), 4 * ONE_IN_LINE);

        board.place(0, Mark::X);
        // Diagonal 0-4-8 now holds two X; lines through 0 alone add 2 more
        assert_eq!(strategic_score(&board), TWO_IN_LINE + 3 * ONE_IN_LINE + 2 * ONE_IN_LINE);

        board.place(8, Mark::O);
        // Diagonal blocked; lines 2-5-8 and 6-7-8 count for O
        assert_eq!(strategic_score(&board), 3 * ONE_IN_LINE + 2 * ONE_IN_LINE - 2 * ONE_IN_LINE);
    }

    #[test]
    fn test_safe_moves_avoid_threatened_destinations() {
        // O threatens a line in subboard 3; X's empty cell 3 in board 0 is unsafe
        let state = state_with(&[], &[(3, 0), (3, 1)], Mark::X, Active::Board(0));
        assert_eq!(safe_moves(&state, 0, Mark::X), 8);
        assert_eq!(safe_moves(&state, 0, Mark::O), 9);
    }

    #[test]
    fn test_center_opening_favours_x() {
        let outcome = apply_move(&BoardState::new(), 4).unwrap();
        // One X in the center: 4 single-mark lines, doubled strategic weight
        assert_eq!(evaluate(&outcome.state), 4 * ONE_IN_LINE * WEIGHT_STRATEGIC);
    }

    #[test]
    fn test_won_board_counts_for_owner() {
        // A won subboard ends the game, so the bonus only shows in the
        // terminal score; a non-terminal position has no won subboards.
        let state = state_with(&[(1, 0), (1, 4), (1, 8)], &[], Mark::O, Active::Board(0));
        assert!(is_terminal(&state));
        assert_eq!(evaluate(&state), WIN_SCORE);
    }

    #[test]
    fn test_evaluation_symmetry() {
        let state = state_with(
            &[(4, 4), (0, 0), (0, 4)],
            &[(4, 0), (2, 2), (3, 0), (3, 1)],
            Mark::O,
            Active::Board(3),
        );
        assert!(!is_terminal(&state));
        assert_eq!(evaluate(&state.swapped()), -evaluate(&state));

        let mut free = state;
        free.active = Active::Any;
        assert_eq!(evaluate(&free.swapped()), -evaluate(&free));
    }
}
