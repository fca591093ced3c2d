//! Compact 83-digit position text
//!
//! Layout: side to move (`0` = X, `1` = O), active subboard (`0`-`8`), then
//! the 81 cells of the global grid in row-major order (`0` empty, `1` X,
//! `2` O).

use std::str::FromStr;

use crate::board::{Active, BoardState, Mark, Move, GRID_SIZE, TOTAL_CELLS};
use crate::error::{EngineResult, FormatError, GameError};

/// Length of a position string
pub const POSITION_LEN: usize = 2 + TOTAL_CELLS;

/// Starting position: X to move in the center subboard, empty grid
pub const INITIAL_POSITION: &str = concat!(
    "04",
    "000000000",
    "000000000",
    "000000000",
    "000000000",
    "000000000",
    "000000000",
    "000000000",
    "000000000",
    "000000000"
);

/// Parse one digit no greater than `max`
fn digit(offset: usize, ch: char, max: u32, expected: &'static str) -> EngineResult<u8> {
    match ch.to_digit(10) {
        Some(d) if d <= max => Ok(d as u8),
        _ => Err(FormatError::InvalidCharacter {
            offset,
            found: ch,
            expected,
        }
        .into()),
    }
}

/// Decode a position string.
///
/// Subboard results are recomputed from the cells.
pub fn decode(text: &str) -> EngineResult<BoardState> {
    let actual = text.chars().count();
    if actual != POSITION_LEN {
        return Err(FormatError::WrongLength {
            expected: POSITION_LEN,
            actual,
        }
        .into());
    }

    let mut chars = text.chars();
    let mut next = || chars.next().unwrap_or('\0');

    let to_move = match digit(0, next(), 1, "side 0-1")? {
        0 => Mark::X,
        _ => Mark::O,
    };
    let active = Active::Board(digit(1, next(), 8, "subboard 0-8")?);

    let mut state = BoardState::empty(to_move, active);
    for index in 0..TOTAL_CELLS {
        let mv = Move::from_global(index / GRID_SIZE, index % GRID_SIZE);
        match digit(index + 2, next(), 2, "cell 0-2")? {
            1 => state.place(mv, Mark::X),
            2 => state.place(mv, Mark::O),
            _ => {}
        }
    }
    state.refresh_results();
    Ok(state)
}

/// Encode a position.
///
/// Fails for `Active::Any`, which the compact format cannot express.
pub fn encode(state: &BoardState) -> EngineResult<String> {
    let active = match state.active {
        Active::Board(b) if b <= 8 => b,
        _ => return Err(GameError::InvalidFormat(FormatError::UnrepresentableActive)),
    };

    let mut text = String::with_capacity(POSITION_LEN);
    text.push(match state.to_move {
        Mark::X => '0',
        Mark::O => '1',
    });
    text.push(char::from(b'0' + active));
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            text.push(match state.cell_at(row, col).mark() {
                None => '0',
                Some(Mark::X) => '1',
                Some(Mark::O) => '2',
            });
        }
    }
    Ok(text)
}

impl FromStr for BoardState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
