//! Move application and generation
//!
//! A move marks one cell of the active subboard. Completing a line wins the
//! subboard and ends the game; filling a subboard without a line empties it
//! again. The opponent is then routed to the subboard whose index equals the
//! cell just played.

use serde::{Deserialize, Serialize};

use crate::board::{Active, BoardState, Mark, Move, CELLS, SUB_BOARDS};
use crate::error::{EngineResult, GameError, IllegalMoveReason};

use super::lines::find_winner;

/// How the next active subboard is chosen after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingRule {
    /// Always the subboard numbered by the cell just played
    #[default]
    Strict,
    /// As `Strict`, but a decided or full target frees the opponent to
    /// play in any subboard. Moves recycle full boards, so a full target
    /// only occurs in decoded or hand-built positions.
    FreeOnDecided,
}

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Position after the move
    pub state: BoardState,
    /// Set when this move won its subboard
    pub sub_board_winner: Option<Mark>,
    /// True once any subboard is won
    pub game_over: bool,
}

/// Rule set, parameterized by the routing variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub routing: RoutingRule,
}

impl Rules {
    pub const fn new(routing: RoutingRule) -> Self {
        Self { routing }
    }

    /// Play `cell` inside the active subboard.
    ///
    /// Fails with `WrongSubBoard` when no single subboard is active; use
    /// `apply_move_at` to name one explicitly.
    pub fn apply_move(&self, state: &BoardState, cell: u8) -> EngineResult<MoveOutcome> {
        match state.active {
            Active::Board(board) => self.apply_move_at(state, Move { board, cell }),
            Active::Any => Err(GameError::illegal(IllegalMoveReason::WrongSubBoard)),
        }
    }

    /// Play a fully specified move.
    pub fn apply_move_at(&self, state: &BoardState, mv: Move) -> EngineResult<MoveOutcome> {
        if mv.board as usize >= SUB_BOARDS || mv.cell as usize >= CELLS {
            return Err(GameError::illegal(IllegalMoveReason::CellOutOfRange));
        }
        if !state.active.allows(mv.board) {
            return Err(GameError::illegal(IllegalMoveReason::WrongSubBoard));
        }
        let target = state.sub_board(mv.board);
        if target.is_decided() {
            return Err(GameError::illegal(IllegalMoveReason::SubBoardDecided));
        }
        if !target.is_empty_at(mv.cell) {
            return Err(GameError::illegal(IllegalMoveReason::CellOccupied));
        }

        let mark = state.to_move;
        let mut next = *state;
        let board = next.sub_board_mut(mv.board);
        board.place(mv.cell, mark);

        let sub_board_winner = find_winner(board);
        board.set_result(sub_board_winner);
        if sub_board_winner.is_none() && board.is_full() {
            // Drawn subboards are recycled
            board.clear();
        }

        next.active = self.next_active(&next, mv.cell);
        next.to_move = mark.opponent();

        Ok(MoveOutcome {
            state: next,
            sub_board_winner,
            game_over: is_terminal(&next),
        })
    }

    fn next_active(&self, state: &BoardState, cell: u8) -> Active {
        match self.routing {
            RoutingRule::Strict => Active::Board(cell),
            RoutingRule::FreeOnDecided => {
                let target = state.sub_board(cell);
                if target.is_decided() || target.is_full() {
                    Active::Any
                } else {
                    Active::Board(cell)
                }
            }
        }
    }
}

/// Apply a move under the strict routing rule
#[inline]
pub fn apply_move(state: &BoardState, cell: u8) -> EngineResult<MoveOutcome> {
    Rules::default().apply_move(state, cell)
}

/// Apply a fully specified move under the strict routing rule
#[inline]
pub fn apply_move_at(state: &BoardState, mv: Move) -> EngineResult<MoveOutcome> {
    Rules::default().apply_move_at(state, mv)
}

/// True iff any subboard has been won
#[inline]
pub fn is_terminal(state: &BoardState) -> bool {
    state.sub_boards().iter().any(|b| b.is_decided())
}

/// Legal moves in ascending (board, cell) order.
///
/// Covers the empty cells of every undecided subboard the active constraint
/// allows. Lazy and recomputed on every call.
pub fn valid_moves(state: &BoardState) -> ValidMoves<'_> {
    let boards = match state.active {
        Active::Any => 0..SUB_BOARDS as u8,
        Active::Board(b) => b..b.saturating_add(1),
    };
    ValidMoves {
        state,
        boards,
        board: 0,
        remaining: 0,
    }
}

/// Iterator over legal moves, see `valid_moves`
pub struct ValidMoves<'a> {
    state: &'a BoardState,
    boards: std::ops::Range<u8>,
    board: u8,
    remaining: u16,
}

impl Iterator for ValidMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        // Drain the current board's empty cells, then advance to the next
        // undecided board.
        while self.remaining == 0 {
            let board = self.boards.next()?;
            if (board as usize) >= SUB_BOARDS {
                return None;
            }
            let sub_board = self.state.sub_board(board);
            if !sub_board.is_decided() {
                self.board = board;
                self.remaining = sub_board.empty_mask();
            }
        }

        let cell = self.remaining.trailing_zeros() as u8;
        self.remaining &= self.remaining - 1;
        Some(Move {
            board: self.board,
            cell,
        })
    }
}
