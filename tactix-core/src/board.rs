//! 3x3 board primitives and the eight winning lines

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// First and last valid 1-based positions
pub const MIN_POSITION: u8 = 1;
pub const MAX_POSITION: u8 = 9;

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Board cells in row-major order (0,1,2 / 3,4,5 / 6,7,8)
pub type Board = [Option<Mark>; BOARD_CELLS];

/// The 8 winning lines as cell-index triples
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// Map a 1-based position to its cell index, if on the board
pub fn position_to_index(position: u8) -> Option<usize> {
    if (MIN_POSITION..=MAX_POSITION).contains(&position) {
        Some((position - 1) as usize)
    } else {
        None
    }
}

/// Map a cell index back to its 1-based position
pub fn index_to_position(index: usize) -> u8 {
    index as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_mapping() {
        assert_eq!(position_to_index(1), Some(0));
        assert_eq!(position_to_index(9), Some(8));
        assert_eq!(position_to_index(0), None);
        assert_eq!(position_to_index(10), None);

        for index in 0..BOARD_CELLS {
            assert_eq!(position_to_index(index_to_position(index)), Some(index));
        }
    }

    #[test]
    fn test_lines_cover_the_board() {
        let mut appearances = [0usize; BOARD_CELLS];
        for line in &LINES {
            for &index in line {
                appearances[index] += 1;
            }
        }

        // Center sits on 4 lines, corners on 3, edges on 2
        assert_eq!(appearances[4], 4);
        for &corner in &[0, 2, 6, 8] {
            assert_eq!(appearances[corner], 3);
        }
        for &edge in &[1, 3, 5, 7] {
            assert_eq!(appearances[edge], 2);
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }
}
