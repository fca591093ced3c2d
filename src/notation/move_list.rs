//! Move-list text: one digit `0`-`8` per ply
//!
//! Each digit is the cell played inside whatever subboard was active at
//! that ply, so a list only makes sense replayed from a known position.

use crate::board::{Active, BoardState, Mark, Move};
use crate::error::{EngineResult, FormatError, GameError, IllegalMoveReason};
use crate::rules::{is_terminal, Rules};

/// A replayed move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Position after the last move
    pub state: BoardState,
    /// Every move played, in order
    pub moves: Vec<Move>,
    /// Game winner, if the list ends with a won subboard
    pub winner: Option<Mark>,
}

/// Parse move-list text into cell indices.
///
/// The empty string is a valid, zero-move list.
pub fn parse_move_list(text: &str) -> EngineResult<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(offset, ch)| match ch.to_digit(10) {
            Some(d) if d <= 8 => Ok(d as u8),
            _ => Err(GameError::from(FormatError::InvalidCharacter {
                offset,
                found: ch,
                expected: "cell 0-8",
            })),
        })
        .collect()
}

/// Render cell indices as move-list text
pub fn encode_move_list<I>(cells: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    cells
        .into_iter()
        .map(|cell| char::from(b'0' + cell))
        .collect()
}

/// Replay a move list from the starting position under strict routing
pub fn replay(text: &str) -> EngineResult<Replay> {
    replay_from(&BoardState::new(), text, &Rules::default())
}

/// Replay a move list from `base`.
///
/// Illegal moves are reported with their 1-based ply. Replay stops at the
/// first move that wins a subboard; any digits after it are ignored, so
/// `moves` holds only the plies actually played.
pub fn replay_from(base: &BoardState, text: &str, rules: &Rules) -> EngineResult<Replay> {
    let cells = parse_move_list(text)?;
    let mut state = *base;
    let mut moves = Vec::with_capacity(cells.len());

    for (index, cell) in cells.into_iter().enumerate() {
        if is_terminal(&state) {
            break;
        }
        let Active::Board(board) = state.active else {
            return Err(GameError::IllegalMoveAt {
                ply: index + 1,
                reason: IllegalMoveReason::WrongSubBoard,
            });
        };
        let mv = Move { board, cell };
        let outcome = rules
            .apply_move_at(&state, mv)
            .map_err(|e| e.at_ply(index + 1))?;
        moves.push(mv);
        state = outcome.state;
    }

    Ok(Replay {
        state,
        moves,
        winner: state.winner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_move_list("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_move_list("408").unwrap(), vec![4, 0, 8]);
    }

    #[test]
    fn test_parse_rejects_nine() {
        let err = parse_move_list("129").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidFormat(FormatError::InvalidCharacter {
                offset: 2,
                found: '9',
                expected: "cell 0-8"
            })
        );
    }

    #[test]
    fn test_encode_move_list() {
        assert_eq!(encode_move_list([4, 4, 0]), "440");
        assert_eq!(encode_move_list(Vec::new()), "");
    }

    #[test]
    fn test_replay_self_routing() {
        let replay = replay("44").unwrap();
        assert_eq!(replay.moves, vec![Move::new(4, 4), Move::new(4, 4)]);
        assert_eq!(replay.state.cell(Move::new(4, 4)), Cell::X);
        assert_eq!(replay.state.to_move, Mark::X);
    }

    #[test]
    fn test_replay_reports_illegal_ply() {
        // X: board 4 cell 0 -> O: board 0 cell 4 -> X: board 4 cell 0 (taken)
        let err = replay("040").unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMoveAt {
                ply: 3,
                reason: IllegalMoveReason::CellOccupied
            }
        );
    }

    #[test]
    fn test_replay_detects_win() {
        // X builds 0-1-2 in board 4 while O answers in boards 0 and 1
        // X:4/0 O:0/4 X:4/1 O:1/4 X:4/2
        let replay = replay("04142").unwrap();
        assert_eq!(replay.winner, Some(Mark::X));
        assert_eq!(replay.state.sub_board(4).result(), Some(Mark::X));
        assert_eq!(replay.moves.len(), 5);
    }

    #[test]
    fn test_replay_stops_at_win() {
        // Ply 6 would be legal for O in board 2, but the game is already over
        let full = replay("041420").unwrap();
        let played = replay("04142").unwrap();
        assert_eq!(full, played);
        assert_eq!(full.moves.len(), 5);
        assert_eq!(full.winner, Some(Mark::X));
        assert_eq!(full.state.cell(Move::new(2, 0)), Cell::Empty);
    }

    #[test]
    fn test_replay_from_custom_base() {
        let base = BoardState::empty(Mark::O, Active::Board(8));
        let replay = replay_from(&base, "3", &Rules::default()).unwrap();
        assert_eq!(replay.state.cell(Move::new(8, 3)), Cell::O);
        assert_eq!(replay.state.active, Active::Board(3));
    }
}
