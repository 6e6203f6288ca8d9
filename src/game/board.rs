use super::pieces::{Cell, Color, Piece};
use super::square::Square;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

pub type PieceBoard = [[Cell; 8]; 8];

/// The 8x8 mailbox. Row 0 is black's back rank, row 7 is white's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: PieceBoard,
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for col in 0..8u8 {
            let piece = BACK_RANK[col as usize];

            board.set(Square::new(0, col), Some((piece, Color::Black)));
            board.set(Square::new(1, col), Some((Piece::Pawn, Color::Black)));
            board.set(Square::new(6, col), Some((Piece::Pawn, Color::White)));
            board.set(Square::new(7, col), Some((piece, Color::White)));
        }

        board
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: PieceBoard::default(),
        }
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row as usize][square.col as usize] = cell;
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|(_, color)| color)
    }

    /// Read-only grid, indexed `[row][col]`.
    pub fn cells(&self) -> &PieceBoard {
        &self.cells
    }

    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.color_at(square) == Some(color))
    }

    pub fn kings_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.get(square) == Some((Piece::King, color)))
    }
}

/// A single relocation, snapshotting the board contents it touches.
///
/// Two moves compare equal when their coordinates match, regardless of the pieces.
#[derive(Copy, Clone, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Cell,
    pub captured: Cell,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl Move {
    pub fn new(from: Square, to: Square, board: &Board) -> Move {
        Move {
            from,
            to,
            moved: board.get(from),
            captured: board.get(to),
        }
    }

    /// Parses long algebraic notation ("e2e4") against `board`.
    ///
    /// A trailing promotion letter is accepted and ignored.
    pub fn parse(notation: &str, board: &Board) -> Option<Move> {
        let from = Square::parse(notation.get(0..2)?)?;
        let to = Square::parse(notation.get(2..4)?)?;

        match notation.get(4..) {
            Some("") => {}
            Some(rest) if rest.chars().count() == 1 => {
                Piece::from_char(rest.chars().next()?.to_ascii_lowercase())?;
            }
            _ => return None,
        }

        Some(Move::new(from, to, board))
    }

    pub fn is_king_move(&self) -> bool {
        matches!(self.moved, Some((Piece::King, _)))
    }

    pub fn unparse(&self) -> String {
        format!("{}{}", self.from.unparse(), self.to.unparse())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unparse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::default();

        assert_eq!(board.squares_of(Color::White).count(), 16);
        assert_eq!(board.squares_of(Color::Black).count(), 16);
        assert_eq!(
            board.kings_of(Color::White).collect::<Vec<_>>(),
            vec![Square::new(7, 4)]
        );
        assert_eq!(
            board.get(Square::parse("d8").unwrap()),
            Some((Piece::Queen, Color::Black))
        );
        assert_eq!(board.get(Square::parse("e4").unwrap()), None);
    }

    #[test]
    fn test_move_snapshots_and_equality() {
        let mut board = Board::default();
        let board_move = Move::parse("e2e4", &board).unwrap();

        assert_eq!(board_move.moved, Some((Piece::Pawn, Color::White)));
        assert_eq!(board_move.captured, None);
        assert_eq!(board_move.unparse(), "e2e4");

        // same coordinates, different board contents
        board.set(board_move.from, Some((Piece::Queen, Color::Black)));
        assert_eq!(Move::parse("e2e4", &board).unwrap(), board_move);
        assert_ne!(Move::parse("e2e3", &board).unwrap(), board_move);
    }

    #[test]
    fn test_move_parse_rejects_garbage() {
        let board = Board::default();

        assert!(Move::parse("e2", &board).is_none());
        assert!(Move::parse("e2e9", &board).is_none());
        assert!(Move::parse("e7e8q", &board).is_some());
        assert!(Move::parse("e7e8x", &board).is_none());
        assert!(Move::parse("e7e8qq", &board).is_none());
    }
}
