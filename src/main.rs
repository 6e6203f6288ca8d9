use clap::Parser;
use pinray::utils::{Args, Command};
use pinray::{GameController, GameStatus, MoveResultType, Square};

fn print_perft(controller: &mut GameController, depth: usize) {
    let moves = controller.perft(depth);

    for (m, c) in &moves {
        println!("{}: {}", m.unparse(), c);
    }

    println!("\nNodes: {}", moves.iter().map(|(_, c)| c).sum::<usize>());
}

fn report_status(controller: &mut GameController) {
    match controller.status() {
        GameStatus::Ongoing => {}
        GameStatus::Check => println!("Check!"),
        GameStatus::Checkmate => println!("Checkmate, {:?} wins", !controller.game.side),
        GameStatus::Stalemate => println!("Stalemate"),
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut controller = GameController::new();

    controller.parallel_perft = !args.no_parallel;
    controller.highlight = !args.no_highlight;

    if let Some(depth) = args.perft {
        print_perft(&mut controller, depth);
        return;
    }

    controller.print();

    while let Some(command) = Command::receive() {
        match command {
            Command::Quit => break,
            Command::Move(notation) => match controller.try_move_piece(&notation) {
                MoveResultType::Success => {
                    controller.print();
                    if let Some(last) = controller.game.history.last() {
                        println!("{}", last.unparse());
                    }
                    report_status(&mut controller);
                }
                result => println!("{:?}", result),
            },
            Command::Undo => match controller.try_unmove_piece() {
                MoveResultType::Success => {
                    controller.print();
                    report_status(&mut controller);
                }
                result => println!("{:?}", result),
            },
            Command::Moves(None) => {
                let moves = controller.game.get_valid_moves();
                let names: Vec<_> = moves.iter().map(|m| m.unparse()).collect();

                println!("{}", names.join(" "));
                println!("\nMoves: {}", moves.len());
            }
            Command::Moves(Some(square_string)) => match Square::parse(&square_string) {
                Some(square) => controller.print_targets(square),
                None => println!("{:?}", MoveResultType::InvalidNotation),
            },
            Command::Perft(depth_string) => match depth_string.parse::<usize>() {
                Ok(depth) => print_perft(&mut controller, depth),
                Err(_) => println!("Invalid perft depth: {}", depth_string),
            },
            Command::SetOption(name, value) => controller.set_option(&name, &value),
            Command::Options => controller.print_options(),
            Command::New => {
                controller.new_game();
                controller.print();
            }
            Command::Print => controller.print(),
            Command::History => println!("{}", controller.game.history.unparse()),
            Command::Invalid(input) => {
                if !input.is_empty() {
                    log::warn!("Unknown command: {}", input);
                }
            }
        }
    }
}
