use pinray::{Board, Color, GameState, GameStatus, Move, Piece, Square};

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

#[test]
fn test_setup_needs_one_king_per_side() {
    let mut board = Board::empty();
    board.set(sq("e1"), Some((Piece::King, Color::White)));
    assert!(GameState::from_board(board.clone(), Color::White).is_none());

    board.set(sq("e8"), Some((Piece::King, Color::Black)));
    let game = GameState::from_board(board.clone(), Color::White).unwrap();
    assert_eq!(game.king(Color::Black), sq("e8"));

    board.set(sq("a8"), Some((Piece::King, Color::Black)));
    assert!(GameState::from_board(board, Color::White).is_none());
}

#[test]
fn test_scholars_mate_through_the_public_api() {
    let mut game = GameState::new();

    for notation in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        let board_move = Move::parse(notation, game.board()).unwrap();
        assert!(game.get_valid_moves().contains(&board_move), "{}", notation);
        game.make_move(board_move);
    }

    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.history.last().unwrap().captured, Some((Piece::Pawn, Color::Black)));

    // taking the mating move back reopens the game
    game.undo_move();
    assert_eq!(game.side, Color::White);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_king_walk_keeps_cache_in_sync() {
    let mut game = GameState::new();

    for notation in ["e2e4", "e7e5", "e1e2", "e8e7", "e2d3", "e7d6"] {
        let board_move = Move::parse(notation, game.board()).unwrap();
        game.make_move(board_move);
    }

    assert_eq!(game.king(Color::White), sq("d3"));
    assert_eq!(game.king(Color::Black), sq("d6"));

    game.get_valid_moves();
    assert_eq!(game.board().get(game.king(game.side)), Some((Piece::King, game.side)));

    for _ in 0..6 {
        game.undo_move();
    }

    assert_eq!(game.king(Color::White), sq("e1"));
    assert_eq!(game.king(Color::Black), sq("e8"));
    assert_eq!(game.board(), &Board::default());
}
