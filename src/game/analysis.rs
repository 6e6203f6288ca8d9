use super::board::Board;
use super::pieces::{Color, Piece};
use super::square::{Direction, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, Square, is_diagonal};
use fxhash::FxHashMap;

/// Pinned square -> direction from the king toward the pinned piece.
pub type PinTable = FxHashMap<Square, Direction>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    // king -> attacker for line pieces, the jump itself for knights
    pub direction: Direction,
}

/// Pins and checks against one color's king, as seen from one king square.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    pub pins: PinTable,
    pub checks: Vec<Check>,
}

impl Analysis {
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    pub fn pin_of(&self, square: Square) -> Option<Direction> {
        self.pins.get(&square).copied()
    }
}

/// Whether `piece` of `attacker` color, found `distance` steps from the king
/// along `direction` with nothing in between, attacks the king.
fn attacks_along(piece: Piece, attacker: Color, direction: Direction, distance: i8) -> bool {
    match piece {
        Piece::Rook => !is_diagonal(direction),
        Piece::Bishop => is_diagonal(direction),
        Piece::Queen => true,
        Piece::King => distance == 1,
        // pawns only capture forward, so the king must sit on the pawn's front side
        Piece::Pawn => distance == 1 && is_diagonal(direction) && direction.0 == -attacker.forward(),
        Piece::Knight => false,
    }
}

/// Casts rays out of `king` and collects the pins and checks against `color`.
///
/// `king` does not have to be where the king of `color` actually stands: the
/// king itself is transparent to the rays, so a hypothetical square sees the
/// attackers that would become visible once the king leaves its current one.
pub fn analyze(board: &Board, color: Color, king: Square) -> Analysis {
    let mut analysis = Analysis::default();

    for direction in QUEEN_DIRECTIONS {
        let mut possible_pin: Option<Square> = None;

        for distance in 1..8 {
            let Some(square) = king.offset(direction, distance) else {
                break;
            };

            match board.get(square) {
                None => {}
                Some((Piece::King, owner)) if owner == color => {}
                Some((_, owner)) if owner == color => {
                    if possible_pin.is_some() {
                        // two of our own pieces shield the king on this ray
                        break;
                    }

                    possible_pin = Some(square);
                }
                Some((piece, owner)) => {
                    if attacks_along(piece, owner, direction, distance) {
                        match possible_pin {
                            Some(pinned) => {
                                analysis.pins.insert(pinned, direction);
                            }
                            None => analysis.checks.push(Check {
                                attacker: square,
                                direction,
                            }),
                        }
                    }

                    break;
                }
            }
        }
    }

    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king.offset(offset, 1) {
            if board.get(square) == Some((Piece::Knight, !color)) {
                analysis.checks.push(Check {
                    attacker: square,
                    direction: offset,
                });
            }
        }
    }

    log::trace!(
        "{:?} king on {}: {} pin(s), {} check(s)",
        color,
        king,
        analysis.pins.len(),
        analysis.checks.len()
    );

    analysis
}
