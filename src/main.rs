use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::*;

mod display;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two player Connect 4 in the terminal", long_about = None)]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = HEIGHT)]
    height: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = WIDTH)]
    width: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

enum Command {
    Drop(usize),
    NewGame,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr so they don't break up the board
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::new(args.height, args.width)?;
    let mut engine = GameEngine::with_config(config);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("Enter a column number to drop a piece, 'n' for a new game or 'q' to quit\n");

    // game loop
    loop {
        display::draw(engine.grid())?;

        match engine.outcome() {
            Outcome::InProgress => {
                let command = match read_command(&stdin, engine.current_player())? {
                    Some(command) => command,
                    None => continue,
                };

                let column = match command {
                    Command::Quit => break,
                    Command::NewGame => {
                        engine.reset();
                        continue;
                    }
                    Command::Drop(column) => column,
                };

                match engine.drop_piece(column) {
                    Ok(DropResult {
                        placement: Placement::Rejected,
                        ..
                    }) => println!("Column {} is full", column + 1),
                    Ok(_) => {}
                    Err(EngineError::OutOfRange { width, .. }) => {
                        println!("Columns must be between 1 and {}", width)
                    }
                    Err(err) => println!("{}", err),
                }
            }

            // end states
            outcome => {
                match outcome.winner() {
                    Some(player) => println!("Player {} won!", player.number()),
                    None => println!("The game is a tie!"),
                }
                if !ask_yes_no(&stdin, "Play again? y/n: ")? {
                    break;
                }
                engine.reset();
            }
        }
    }
    Ok(())
}

/// Reads one line of input, returning `None` if it wasn't understood
fn read_command(stdin: &Stdin, player: Player) -> Result<Option<Command>> {
    print!("Player {} > ", player.number());
    stdout().flush()?;

    let mut input_str = String::new();
    if stdin.read_line(&mut input_str)? == 0 {
        // end of input
        return Ok(Some(Command::Quit));
    }

    let command = match input_str.trim().to_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewGame),
        other => match other.parse::<usize>() {
            // columns are 1-based on screen
            Ok(column) if column >= 1 => Some(Command::Drop(column - 1)),
            _ => {
                println!("Invalid input: {}", input_str.trim());
                None
            }
        },
    };
    Ok(command)
}

fn ask_yes_no(stdin: &Stdin, prompt: &str) -> Result<bool> {
    loop {
        print!("{}", prompt);
        stdout().flush()?;

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
