use crate::game::board::Move;

/// Append-only log of played moves; popping it drives undo.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, board_move: Move) {
        self.moves.push(board_move);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Space-separated long algebraic notation of every move so far.
    pub fn unparse(&self) -> String {
        self.moves
            .iter()
            .map(|m| m.unparse())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
