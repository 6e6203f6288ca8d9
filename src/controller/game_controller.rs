use crate::game::{Color, GameState, GameStatus, Move, Square};
use rayon::prelude::*;

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResultType {
    Success,         // successful move
    InvalidNotation, // wrong algebraic notation
    InvalidMove,     // not in the legal move list
    NoHistory,       // nothing to take back
}

pub struct GameController {
    pub game: GameState,
    pub parallel_perft: bool,
    pub highlight: bool,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            parallel_perft: true,
            highlight: true,
        }
    }

    pub fn new_game(&mut self) {
        self.game = GameState::new();
        log::info!("New game");
    }

    pub fn set_option(&mut self, name: &str, value: &str) {
        let flag = match value.to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };

        match (name.to_lowercase().as_str(), flag) {
            ("parallelperft", Some(flag)) => self.parallel_perft = flag,
            ("highlight", Some(flag)) => self.highlight = flag,
            ("parallelperft" | "highlight", None) => eprintln!(
                "Invalid value for {} option: {}. Expected 'true' or 'false'",
                name, value
            ),
            _ => eprintln!("Unknown option: {}", name),
        }
    }

    pub fn print_options(&self) {
        println!("option name ParallelPerft type check default true");
        println!("option name Highlight type check default true");
    }

    pub fn print_with_moves(&self, possible_moves: &[Square]) {
        const RESET: &str = "\x1b[0m";
        const LIGHT_SQUARE_BG: &str = "\x1b[48;5;172m";
        const DARK_SQUARE_BG: &str = "\x1b[48;5;130m";
        const WHITE_PIECE: &str = "\x1b[1;97m";
        const BLACK_PIECE: &str = "\x1b[1;30m";
        const MOVE_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m";

        let heading_text = match self.game.side {
            Color::White => "White to move",
            Color::Black => "Black to move",
        };
        let heading_color = match self.game.side {
            Color::White => WHITE_PIECE,
            Color::Black => BLACK_PIECE,
        };

        // 8 squares * 3 chars, plus the rank column
        let board_width = 24;
        let padding = (board_width - heading_text.len()) / 2;
        let right_padding = board_width - heading_text.len() - padding;

        println!(
            "  {}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        for (row, cells) in self.game.board().cells().iter().enumerate() {
            let mut line = format!("{} ", 8 - row);

            for (col, cell) in cells.iter().enumerate() {
                let square = Square::new(row as u8, col as u8);
                let bg_color = if (row + col) % 2 == 0 {
                    LIGHT_SQUARE_BG
                } else {
                    DARK_SQUARE_BG
                };
                line.push_str(bg_color);

                match cell {
                    Some((piece, color)) => {
                        let piece_color = match color {
                            Color::White => WHITE_PIECE,
                            Color::Black => BLACK_PIECE,
                        };
                        let marker = if possible_moves.contains(&square) {
                            MOVE_HIGHLIGHT
                        } else {
                            piece_color
                        };
                        line.push_str(&format!("{} {} {}", marker, piece.to_emoji(), RESET));
                    }
                    None if possible_moves.contains(&square) => {
                        line.push_str(&format!("{} ● {}", MOVE_HIGHLIGHT, RESET));
                    }
                    None => line.push_str("   "),
                }

                line.push_str(RESET);
            }
            println!("{}", line);
        }

        println!("   a  b  c  d  e  f  g  h");
    }

    pub fn print(&self) {
        self.print_with_moves(&[]);
    }

    /// Destinations the piece on `square` can legally reach.
    pub fn targets_of(&mut self, square: Square) -> Vec<Square> {
        self.game
            .get_valid_moves()
            .iter()
            .filter(|m| m.from == square)
            .map(|m| m.to)
            .collect()
    }

    pub fn print_targets(&mut self, square: Square) {
        let targets = self.targets_of(square);

        if self.highlight {
            self.print_with_moves(&targets);
        } else {
            let names: Vec<_> = targets.iter().map(|s| s.unparse()).collect();
            println!("{}", names.join(" "));
        }
    }

    pub fn try_move_piece(&mut self, long_algebraic_notation: &str) -> MoveResultType {
        match Move::parse(long_algebraic_notation, self.game.board()) {
            Some(board_move) => {
                let valid_moves = self.game.get_valid_moves();

                // membership is by coordinates, so take the generated instance
                match valid_moves.into_iter().find(|m| *m == board_move) {
                    Some(valid_move) => {
                        self.game.make_move(valid_move);
                        log::info!("Played {}", valid_move);
                        MoveResultType::Success
                    }
                    None => MoveResultType::InvalidMove,
                }
            }
            None => MoveResultType::InvalidNotation,
        }
    }

    pub fn try_unmove_piece(&mut self) -> MoveResultType {
        match self.game.history.last().copied() {
            None => MoveResultType::NoHistory,
            Some(last) => {
                self.game.undo_move();
                log::info!("Took back {}", last);
                MoveResultType::Success
            }
        }
    }

    /// Status of the side to move, logged when the game is over.
    pub fn status(&mut self) -> GameStatus {
        let status = self.game.status();

        match status {
            GameStatus::Checkmate => log::info!("{:?} is checkmated", self.game.side),
            GameStatus::Stalemate => log::info!("{:?} is stalemated", self.game.side),
            _ => {}
        }

        status
    }

    pub fn perft(&mut self, depth: usize) -> Vec<(Move, usize)> {
        let root_moves = self.game.get_valid_moves();

        if self.parallel_perft {
            let game = &self.game;

            root_moves
                .into_par_iter()
                .map(|board_move| {
                    let mut local = game.clone();
                    (board_move, Self::dfs_count_moves(&mut local, board_move, depth))
                })
                .collect()
        } else {
            root_moves
                .into_iter()
                .map(|board_move| {
                    (board_move, Self::dfs_count_moves(&mut self.game, board_move, depth))
                })
                .collect()
        }
    }

    fn dfs_count_moves(game: &mut GameState, initial_move: Move, depth: usize) -> usize {
        if depth <= 1 {
            return 1;
        }

        game.make_move(initial_move);

        let current_moves = game.get_valid_moves();

        // Bulk counting
        let total_count = if depth == 2 {
            current_moves.len()
        } else {
            current_moves
                .into_iter()
                .map(|board_move| Self::dfs_count_moves(game, board_move, depth - 1))
                .sum()
        };

        game.undo_move();

        total_count
    }
}
