use super::analysis::PinTable;
use super::board::{Board, Move};
use super::pieces::{Color, Piece};
use super::square::{
    DIAGONALS, Direction, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, Square, opposite,
};

/// A pinned piece may only slide along its pin line, in either direction.
fn along_pin(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some(pin) => pin == direction || opposite(pin) == direction,
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, pin: Option<Direction>, moves: &mut Vec<Move>) {
    let advance = (color.forward(), 0);

    if let Some(one) = from.offset(advance, 1) {
        if board.get(one).is_none() && along_pin(pin, advance) {
            moves.push(Move::new(from, one, board));

            if from.row == color.pawn_row() {
                if let Some(two) = from.offset(advance, 2) {
                    if board.get(two).is_none() {
                        moves.push(Move::new(from, two, board));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let capture = (color.forward(), side);

        if let Some(to) = from.offset(capture, 1) {
            if board.color_at(to) == Some(!color) && along_pin(pin, capture) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Direction],
    pin: Option<Direction>,
    moves: &mut Vec<Move>,
) {
    for &direction in directions.iter().filter(|&&d| along_pin(pin, d)) {
        for distance in 1..8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };

            match board.color_at(to) {
                None => moves.push(Move::new(from, to, board)),
                Some(owner) if owner != color => {
                    moves.push(Move::new(from, to, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

fn stepping_moves(board: &Board, from: Square, color: Color, offsets: &[Direction], moves: &mut Vec<Move>) {
    for &offset in offsets {
        if let Some(to) = from.offset(offset, 1) {
            if board.color_at(to) != Some(color) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}

/// Appends the pseudo-legal moves of the piece standing on `from`.
///
/// Pins restrict the moves; king moves are not checked for safety here.
pub fn piece_moves(board: &Board, from: Square, pins: &PinTable, moves: &mut Vec<Move>) {
    let Some((piece, color)) = board.get(from) else {
        return;
    };

    let pin = pins.get(&from).copied();

    match piece {
        Piece::Pawn => pawn_moves(board, from, color, pin, moves),
        Piece::Rook => sliding_moves(board, from, color, &ORTHOGONALS, pin, moves),
        Piece::Bishop => sliding_moves(board, from, color, &DIAGONALS, pin, moves),
        Piece::Queen => {
            sliding_moves(board, from, color, &DIAGONALS, pin, moves);
            sliding_moves(board, from, color, &ORTHOGONALS, pin, moves);
        }
        // no jump stays on a line through the knight
        Piece::Knight if pin.is_some() => {}
        Piece::Knight => stepping_moves(board, from, color, &KNIGHT_OFFSETS, moves),
        Piece::King => stepping_moves(board, from, color, &KING_OFFSETS, moves),
    }
}

/// Pseudo-legal moves for every piece of `color`, in board order.
pub fn pseudo_legal_moves(board: &Board, color: Color, pins: &PinTable) -> Vec<Move> {
    let mut moves = Vec::new();

    for square in board.squares_of(color) {
        piece_moves(board, square, pins, &mut moves);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    fn targets(board: &Board, from: &str, pins: &PinTable) -> Vec<String> {
        let mut moves = Vec::new();
        piece_moves(board, sq(from), pins, &mut moves);

        let mut names: Vec<_> = moves.iter().map(|m| m.to.unparse()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_pawn_pushes_and_captures() {
        let mut board = Board::default();
        let none = PinTable::default();

        assert_eq!(targets(&board, "e2", &none), vec!["e3", "e4"]);
        assert_eq!(targets(&board, "d7", &none), vec!["d5", "d6"]);

        // blocked double step, captures only onto enemies
        board.set(sq("e4"), Some((Piece::Knight, Color::Black)));
        board.set(sq("d3"), Some((Piece::Knight, Color::Black)));
        board.set(sq("f3"), Some((Piece::Knight, Color::White)));
        assert_eq!(targets(&board, "e2", &none), vec!["d3", "e3"]);

        // fully blocked
        board.set(sq("e3"), Some((Piece::Pawn, Color::Black)));
        assert_eq!(targets(&board, "e2", &none), vec!["d3"]);
    }

    #[test]
    fn test_pawn_on_last_rank_does_not_leave_the_board() {
        let mut board = Board::empty();
        board.set(sq("a8"), Some((Piece::Pawn, Color::White)));
        board.set(sq("h1"), Some((Piece::Pawn, Color::Black)));

        assert!(targets(&board, "a8", &PinTable::default()).is_empty());
        assert!(targets(&board, "h1", &PinTable::default()).is_empty());
    }

    #[test]
    fn test_sliders_stop_at_blockers() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some((Piece::Rook, Color::White)));
        board.set(sq("d6"), Some((Piece::Pawn, Color::Black)));
        board.set(sq("f4"), Some((Piece::Pawn, Color::White)));

        assert_eq!(
            targets(&board, "d4", &PinTable::default()),
            vec!["a4", "b4", "c4", "d1", "d2", "d3", "d5", "d6", "e4"]
        );
    }

    #[test]
    fn test_pinned_queen_moves_along_the_pin_line_only() {
        let mut board = Board::empty();
        board.set(sq("b2"), Some((Piece::Queen, Color::White)));

        let mut pins = PinTable::default();
        // king on a1, pinner somewhere up the long diagonal
        pins.insert(sq("b2"), (-1, 1));

        assert_eq!(
            targets(&board, "b2", &pins),
            vec!["a1", "c3", "d4", "e5", "f6", "g7", "h8"]
        );
    }

    #[test]
    fn test_pinned_knight_is_frozen() {
        let mut board = Board::empty();
        board.set(sq("c3"), Some((Piece::Knight, Color::White)));

        let mut pins = PinTable::default();
        assert_eq!(targets(&board, "c3", &pins).len(), 8);

        pins.insert(sq("c3"), (-1, 1));
        assert!(targets(&board, "c3", &pins).is_empty());
    }

    #[test]
    fn test_pinned_pawn_may_capture_its_pinner() {
        let mut board = Board::empty();
        board.set(sq("e3"), Some((Piece::Pawn, Color::White)));
        board.set(sq("f4"), Some((Piece::Bishop, Color::Black)));

        let mut pins = PinTable::default();
        // king on d2
        pins.insert(sq("e3"), (-1, 1));

        assert_eq!(targets(&board, "e3", &pins), vec!["f4"]);
    }

    #[test]
    fn test_starting_pseudo_legal_count() {
        let board = Board::default();

        assert_eq!(pseudo_legal_moves(&board, Color::White, &PinTable::default()).len(), 20);
        assert_eq!(pseudo_legal_moves(&board, Color::Black, &PinTable::default()).len(), 20);
    }
}
