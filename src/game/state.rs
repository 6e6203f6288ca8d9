use super::analysis::{Analysis, analyze};
use super::board::{Board, Move};
use super::history::MoveHistory;
use super::movegen::piece_moves;
use super::pieces::{Color, Piece};
use super::square::Square;
use strum::{EnumCount, IntoEnumIterator};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub side: Color,
    pub history: MoveHistory,

    board: Board,
    kings: [Square; Color::COUNT],
    analysis: Analysis,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position, white to move.
    pub fn new() -> GameState {
        let mut kings = [Square::new(0, 0); Color::COUNT];
        kings[Color::Black as usize] = Square::new(0, 4);
        kings[Color::White as usize] = Square::new(7, 4);

        GameState {
            side: Color::White,
            history: MoveHistory::new(),
            board: Board::default(),
            kings,
            analysis: Analysis::default(),
        }
    }

    /// Sets up an arbitrary position. Each color needs exactly one king.
    pub fn from_board(board: Board, side: Color) -> Option<GameState> {
        let mut kings = [Square::new(0, 0); Color::COUNT];

        for color in Color::iter() {
            let mut found = board.kings_of(color);

            match (found.next(), found.next()) {
                (Some(square), None) => kings[color as usize] = square,
                _ => {
                    log::warn!("Position rejected: {:?} does not have exactly one king", color);
                    return None;
                }
            }
        }

        Some(GameState {
            side,
            history: MoveHistory::new(),
            board,
            kings,
            analysis: Analysis::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn king(&self, color: Color) -> Square {
        self.kings[color as usize]
    }

    /// Result of the latest legal-move query.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn in_check(&self) -> bool {
        self.analysis.in_check()
    }

    /// Relocates the moved piece without any legality check and passes the turn.
    pub fn make_move(&mut self, board_move: Move) {
        self.board.set(board_move.from, None);
        self.board.set(board_move.to, board_move.moved);

        if let Some((Piece::King, color)) = board_move.moved {
            self.kings[color as usize] = board_move.to;
        }

        self.history.push(board_move);
        self.side = !self.side;
    }

    /// Reverts the last move; does nothing when no move has been made.
    pub fn undo_move(&mut self) {
        let Some(board_move) = self.history.pop() else {
            return;
        };

        self.board.set(board_move.from, board_move.moved);
        self.board.set(board_move.to, board_move.captured);

        if let Some((Piece::King, color)) = board_move.moved {
            self.kings[color as usize] = board_move.from;
        }

        self.side = !self.side;
    }

    /// King steps of `color` that do not end on an attacked square.
    fn king_moves(&self, color: Color, moves: &mut Vec<Move>) {
        let king = self.king(color);
        let mut candidates = Vec::new();

        piece_moves(&self.board, king, &self.analysis.pins, &mut candidates);

        moves.extend(
            candidates
                .into_iter()
                .filter(|m| !analyze(&self.board, color, m.to).in_check()),
        );
    }

    fn all_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for square in self.board.squares_of(color) {
            if square == self.king(color) {
                self.king_moves(color, &mut moves);
            } else {
                piece_moves(&self.board, square, &self.analysis.pins, &mut moves);
            }
        }

        moves
    }

    /// Squares a non-king move has to land on to answer a single check.
    fn blocking_squares(&self, king: Square) -> Vec<Square> {
        let check = self.analysis.checks[0];

        if let Some((Piece::Knight, _)) = self.board.get(check.attacker) {
            return vec![check.attacker];
        }

        let mut squares = Vec::new();
        for distance in 1..8 {
            let Some(square) = king.offset(check.direction, distance) else {
                break;
            };

            squares.push(square);

            if square == check.attacker {
                break;
            }
        }

        squares
    }

    /// The legal moves for the side to move. Refreshes the pin/check analysis.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let color = self.side;
        let king = self.king(color);

        self.analysis = analyze(&self.board, color, king);

        let moves = match self.analysis.checks.len() {
            0 => self.all_moves(color),
            1 => {
                let blocks = self.blocking_squares(king);

                self.all_moves(color)
                    .into_iter()
                    .filter(|m| m.is_king_move() || blocks.contains(&m.to))
                    .collect()
            }
            _ => {
                let mut moves = Vec::new();
                self.king_moves(color, &mut moves);
                moves
            }
        };

        log::debug!(
            "{:?} to move: {} legal move(s), {} check(s), {} pin(s)",
            color,
            moves.len(),
            self.analysis.checks.len(),
            self.analysis.pins.len()
        );

        moves
    }

    pub fn status(&mut self) -> GameStatus {
        let has_moves = !self.get_valid_moves().is_empty();

        match (has_moves, self.in_check()) {
            (true, false) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }
}
