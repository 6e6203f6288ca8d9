use crate::game::Square;
use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "pinray")]
#[command(about = "Legal move generation for a plain game of chess, played from the terminal", long_about = None)]
pub struct Args {
    /// Print a perft breakdown of the starting position to this depth and exit
    #[arg(long, value_name = "DEPTH")]
    pub perft: Option<usize>,

    /// Count perft nodes on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Print plain destination lists instead of highlighted boards
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Move(String),               // move <e2e4>, or just <e2e4>
    Undo,                       // undo
    Moves(Option<String>),      // moves [square]
    Perft(String),              // perft <depth>
    SetOption(String, String),  // setoption name <name> value <value>
    Options,                    // options
    New,                        // new
    Print,                      // print
    History,                    // history
    Quit,                       // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl Command {
    /// Reads the next command from stdin; `None` once input is exhausted.
    pub fn receive() -> Option<Command> {
        let mut input = String::new();

        match io::stdin().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(Self::parse(&input)),
            Err(error) => {
                log::error!("Failed to read command: {}", error);
                None
            }
        }
    }

    pub fn parse(input: &str) -> Command {
        let parts = input.trim().split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["move", notation] => Command::Move(notation.to_string()),
            [notation] if notation.get(0..2).and_then(Square::parse).is_some() => {
                Command::Move(notation.to_string())
            }
            ["undo"] | ["z"] => Command::Undo,
            ["moves"] => Command::Moves(None),
            ["moves", square] => Command::Moves(Some(square.to_string())),
            ["perft", depth] => Command::Perft(depth.to_string()),
            ["setoption", "name", name_and_rest @ ..] if !name_and_rest.is_empty() => {
                Self::parse_setoption(name_and_rest)
            }
            ["options"] => Command::Options,
            ["new"] => Command::New,
            ["print"] | ["d"] => Command::Print,
            ["history"] => Command::History,
            ["quit"] | ["exit"] => Command::Quit,
            _ => Command::Invalid(input.trim().to_string()),
        }
    }

    fn parse_setoption(parts: &[&str]) -> Command {
        // Find the "value" keyword to split name and value
        match parts.iter().position(|&part| part == "value") {
            Some(value_pos) => {
                let name = parts[..value_pos].join(" ");
                let value = parts[value_pos + 1..].join(" ");

                if !name.is_empty() && !value.is_empty() {
                    Command::SetOption(name, value)
                } else {
                    Command::Invalid(format!("setoption name {} value {}", name, value))
                }
            }
            None => Command::Invalid(format!("setoption name {}", parts.join(" "))),
        }
    }
}
