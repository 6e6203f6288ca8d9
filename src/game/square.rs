use std::fmt::{Display, Formatter, Result};

/// A step vector in (row, col) space.
pub type Direction = (i8, i8);

pub const ORTHOGONALS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

// queen rays, orthogonals first
pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Board coordinate. Row 0 is black's back rank (rank 8), col 0 is the a-file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

pub fn is_diagonal(direction: Direction) -> bool {
    direction.0 != 0 && direction.1 != 0
}

pub fn opposite(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// Walks `distance` steps along `direction`, or `None` once off the board.
    pub fn offset(self, direction: Direction, distance: i8) -> Option<Square> {
        let row = self.row as i8 + direction.0 * distance;
        let col = self.col as i8 + direction.1 * distance;

        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    pub fn file(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(&self) -> char {
        (b'8' - self.row) as char
    }

    pub fn parse(string: &str) -> Option<Square> {
        let mut chars = string.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Some(Square::new(b'8' - rank as u8, file as u8 - b'a'))
            }
            (_, _, _) => None,
        }
    }

    pub fn unparse(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.unparse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_naming() {
        assert_eq!(Square::new(7, 0).unparse(), "a1");
        assert_eq!(Square::new(0, 7).unparse(), "h8");
        assert_eq!(Square::new(6, 4).unparse(), "e2");

        assert_eq!(Square::parse("e2"), Some(Square::new(6, 4)));
        assert_eq!(Square::parse("a8"), Some(Square::new(0, 0)));
        assert_eq!(Square::parse("i1"), None);
        assert_eq!(Square::parse("a9"), None);
        assert_eq!(Square::parse("e2e4"), None);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0);

        assert_eq!(corner.offset((-1, 0), 1), None);
        assert_eq!(corner.offset((1, 1), 7), Some(Square::new(7, 7)));
        assert_eq!(corner.offset((1, 1), 8), None);
        assert_eq!(Square::all().count(), 64);
    }
}
