//! Board representation for subboard tic-tac-toe
//!
//! The 9x9 grid is split into nine 3x3 subboards. Both subboards and the
//! cells inside them are indexed 0-8 in row-major order.

pub mod state;
pub mod sub_board;


// Re-exports
pub use state::BoardState;
pub use sub_board::SubBoard;

/// Number of subboards on the macro board
pub const SUB_BOARDS: usize = 9;
/// Cells per subboard
pub const CELLS: usize = 9;
/// Side length of the global grid
pub const GRID_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 81

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark in this cell, if any
    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Subboard the side to move must play in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Active {
    /// Unconstrained: any undecided subboard
    Any,
    /// Constrained to one subboard (0-8)
    Board(u8),
}

impl Active {
    /// Whether a move into `board` satisfies this constraint
    #[inline]
    pub fn allows(self, board: u8) -> bool {
        match self {
            Active::Any => true,
            Active::Board(b) => b == board,
        }
    }
}

/// A move: subboard index and cell index inside it
///
/// Ordered by (board, cell), the order move generation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub board: u8,
    pub cell: u8,
}

impl Move {
    #[inline]
    pub fn new(board: u8, cell: u8) -> Self {
        debug_assert!((board as usize) < SUB_BOARDS && (cell as usize) < CELLS);
        Self { board, cell }
    }

    /// Row on the global 9x9 grid
    #[inline]
    pub fn row(self) -> usize {
        (self.board as usize / 3) * 3 + self.cell as usize / 3
    }

    /// Column on the global 9x9 grid
    #[inline]
    pub fn col(self) -> usize {
        (self.board as usize % 3) * 3 + self.cell as usize % 3
    }

    /// Move at a global grid coordinate
    #[inline]
    pub fn from_global(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self {
            board: ((row / 3) * 3 + col / 3) as u8,
            cell: ((row % 3) * 3 + col % 3) as u8,
        }
    }
}
