//! The eight winning lines of a 3x3 subboard

use crate::board::{Mark, SubBoard};

/// Line masks: 3 rows, 3 columns, 2 diagonals (bit i = cell i)
pub const LINE_MASKS: [u16; 8] = [
    0b000_000_111, // cells 0 1 2
    0b000_111_000, // cells 3 4 5
    0b111_000_000, // cells 6 7 8
    0b001_001_001, // cells 0 3 6
    0b010_010_010, // cells 1 4 7
    0b100_100_100, // cells 2 5 8
    0b100_010_001, // cells 0 4 8
    0b001_010_100, // cells 2 4 6
];

/// Winner of a subboard: the mark filling the first complete line, in
/// row, column, diagonal order.
pub fn find_winner(board: &SubBoard) -> Option<Mark> {
    let x = board.mask(Mark::X);
    let o = board.mask(Mark::O);
    LINE_MASKS.iter().find_map(|&line| {
        if x & line == line {
            Some(Mark::X)
        } else if o & line == line {
            Some(Mark::O)
        } else {
            None
        }
    })
}

/// Marks of X and O on one line
#[inline]
pub fn line_counts(board: &SubBoard, line: u16) -> (u32, u32) {
    (
        (board.mask(Mark::X) & line).count_ones(),
        (board.mask(Mark::O) & line).count_ones(),
    )
}

/// Whether `mark` has two cells of some line with the third one empty
pub fn has_two_in_a_row_threat(board: &SubBoard, mark: Mark) -> bool {
    let own = board.mask(mark);
    let empty = board.empty_mask();
    LINE_MASKS
        .iter()
        .any(|&line| (own & line).count_ones() == 2 && (empty & line).count_ones() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[u8], o: &[u8]) -> SubBoard {
        let mut board = SubBoard::new();
        for &cell in x {
            board.place(cell, Mark::X);
        }
        for &cell in o {
            board.place(cell, Mark::O);
        }
        board
    }

    #[test]
    fn test_line_masks_have_three_cells() {
        for line in LINE_MASKS {
            assert_eq!(line.count_ones(), 3);
        }
    }

    #[test]
    fn test_find_winner_each_line() {
        let lines: [[u8; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for cells in lines {
            assert_eq!(find_winner(&board_with(&cells, &[])), Some(Mark::X));
            assert_eq!(find_winner(&board_with(&[], &cells)), Some(Mark::O));
        }
    }

    #[test]
    fn test_find_winner_none() {
        // X O X / X O O / O X X - full, no line
        let board = board_with(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(board.is_full());
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_find_winner_uses_first_line() {
        // O holds the top row, X holds the middle row: the top row comes first
        let board = board_with(&[3, 4, 5], &[0, 1, 2]);
        assert_eq!(find_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_two_in_a_row_threat() {
        let board = board_with(&[0, 1], &[]);
        assert!(has_two_in_a_row_threat(&board, Mark::X));
        assert!(!has_two_in_a_row_threat(&board, Mark::O));

        // Blocked: third cell taken by the opponent
        let blocked = board_with(&[0, 1], &[2]);
        assert!(!has_two_in_a_row_threat(&blocked, Mark::X));

        // Split pair on the diagonal still counts
        let diagonal = board_with(&[], &[0, 8]);
        assert!(has_two_in_a_row_threat(&diagonal, Mark::O));
    }

    #[test]
    fn test_line_counts() {
        let board = board_with(&[0, 4], &[8]);
        assert_eq!(line_counts(&board, LINE_MASKS[6]), (2, 1));
        assert_eq!(line_counts(&board, LINE_MASKS[1]), (1, 0));
    }
}
