//! Whole-game position: nine subboards, active constraint and side to move

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::sub_board::SubBoard;
use super::{Active, Cell, Mark, Move, CELLS, GRID_SIZE, SUB_BOARDS};
use crate::rules::lines::find_winner;

/// Subboard the first move is played in
pub const START_BOARD: u8 = 4;

/// Game position
///
/// A small `Copy` value, so deriving a child position never aliases the
/// parent. Results of the subboards are cached alongside the cells and are
/// kept in sync by the rules module (`rules::apply_move`) or by
/// `refresh_results` after raw placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    boards: [SubBoard; SUB_BOARDS],
    /// Subboard constraint for the side to move
    pub active: Active,
    /// Side to move
    pub to_move: Mark,
}

impl BoardState {
    /// Starting position: empty grid, X to move in the center subboard
    pub fn new() -> Self {
        Self::empty(Mark::X, Active::Board(START_BOARD))
    }

    /// Empty grid with the given side to move and constraint
    pub fn empty(to_move: Mark, active: Active) -> Self {
        Self {
            boards: [SubBoard::new(); SUB_BOARDS],
            active,
            to_move,
        }
    }

    /// Random opening: one X and one O on two distinct cells of every
    /// subboard, X to move in the center subboard.
    pub fn random_opening<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::new();
        let mut cells: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        for board in state.boards.iter_mut() {
            cells.shuffle(rng);
            board.place(cells[0], Mark::X);
            board.place(cells[1], Mark::O);
        }
        state
    }

    #[inline]
    pub fn sub_board(&self, index: u8) -> &SubBoard {
        &self.boards[index as usize]
    }

    #[inline]
    pub(crate) fn sub_board_mut(&mut self, index: u8) -> &mut SubBoard {
        &mut self.boards[index as usize]
    }

    #[inline]
    pub fn sub_boards(&self) -> &[SubBoard; SUB_BOARDS] {
        &self.boards
    }

    /// Get cell contents
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.sub_board(mv.board).get(mv.cell)
    }

    /// Get cell contents by global grid coordinates
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cell(Move::from_global(row, col))
    }

    /// Place a mark without rule processing
    ///
    /// Use `rules::apply_move` for game moves. Call `refresh_results`
    /// after a batch of placements to recompute subboard winners.
    #[inline]
    pub fn place(&mut self, mv: Move, mark: Mark) {
        self.sub_board_mut(mv.board).place(mv.cell, mark);
    }

    /// Recompute every subboard result from its cells
    pub fn refresh_results(&mut self) {
        for board in self.boards.iter_mut() {
            let winner = find_winner(board);
            board.set_result(winner);
        }
    }

    /// Game winner: X if any subboard is won by X, else O if any is won by O
    pub fn winner(&self) -> Option<Mark> {
        let won_by = |mark| self.boards.iter().any(|b| b.result() == Some(mark));
        if won_by(Mark::X) {
            Some(Mark::X)
        } else if won_by(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Total marks on the grid
    pub fn mark_count(&self) -> u32 {
        self.boards
            .iter()
            .map(|b| b.count(Mark::X) + b.count(Mark::O))
            .sum()
    }

    /// Position with every mark, result and the side to move exchanged
    pub fn swapped(&self) -> Self {
        let mut boards = self.boards;
        for board in boards.iter_mut() {
            *board = board.swapped();
        }
        Self {
            boards,
            active: self.active,
            to_move: self.to_move.opponent(),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..GRID_SIZE {
                if col > 0 && col % 3 == 0 {
                    f.write_str("| ")?;
                }
                let symbol = match self.cell_at(row, col).mark() {
                    Some(mark) => mark.to_char(),
                    None => '.',
                };
                write!(f, "{symbol}")?;
                if col + 1 < GRID_SIZE {
                    f.write_str(" ")?;
                }
            }
            writeln!(f)?;
        }
        let active = match self.active {
            Active::Any => "any".to_string(),
            Active::Board(b) => b.to_string(),
        };
        write!(f, "to move: {}, active: {}", self.to_move.to_char(), active)
    }
}
