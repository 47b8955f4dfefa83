use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};

use log::LevelFilter;

use std::io::{stdin, stdout, BufRead, Write};
use std::time::Duration;

use connect4_minimax::arena::{self, ArenaConfig};
use connect4_minimax::*;

mod display;
use display::Colour;

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser)]
#[command(name = "connect4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth of the computer in plies
    #[arg(short, long, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Log more (-v for moves, -vv for search statistics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play {
        /// Your piece colour, asked for when not given
        #[arg(long, value_enum)]
        colour: Option<Colour>,

        /// Who makes the first move
        #[arg(long, value_enum, default_value_t = FirstMove::Random)]
        first: FirstMove,

        /// Pause before the computer moves, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
    /// Let the computer play against a computer searching at another depth
    Arena {
        #[arg(long, default_value_t = 20)]
        games: usize,

        /// Search depth of the other computer player
        #[arg(long, default_value_t = 3)]
        opponent_depth: usize,

        /// Random moves played at the start of each game
        #[arg(long, default_value_t = 2)]
        openings: usize,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum FirstMove {
    Player,
    Bot,
    Random,
}

impl FirstMove {
    fn pick(self) -> Side {
        match self {
            FirstMove::Player => Side::Player,
            FirstMove::Bot => Side::Bot,
            FirstMove::Random => {
                if fastrand::bool() {
                    Side::Player
                } else {
                    Side::Bot
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .format_timestamp(None)
        .try_init()?;
    ensure!(cli.depth >= 1, "search depth must be at least 1");

    match cli.command {
        Some(Commands::Arena {
            games,
            opponent_depth,
            openings,
            seed,
        }) => {
            ensure!(opponent_depth >= 1, "search depth must be at least 1");
            run_arena(ArenaConfig {
                games,
                challenger_depth: cli.depth,
                opponent_depth,
                openings,
                seed: seed.unwrap_or_else(|| fastrand::u64(..)),
                show_progress: true,
            })
        }
        Some(Commands::Play {
            colour,
            first,
            delay_ms,
        }) => play(cli.depth, colour, first, Duration::from_millis(delay_ms)),
        None => play(
            cli.depth,
            None,
            FirstMove::Random,
            Duration::from_millis(500),
        ),
    }
}

/// Maps the number of `-v` flags to a log level, warnings only by default
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run_arena(config: ArenaConfig) -> Result<()> {
    println!(
        "Depth {} against depth {}, {} games (seed {})",
        config.challenger_depth, config.opponent_depth, config.games, config.seed
    );
    let report = arena::run(&config)?;

    println!("Depth {} wins: {}", config.challenger_depth, report.challenger_wins);
    println!("Depth {} wins: {}", config.opponent_depth, report.opponent_wins);
    println!("Draws: {}", report.draws);
    println!("Positions searched: {}", report.node_count);
    Ok(())
}

/// Reads one line of input, `None` once the input is closed
fn read_input(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

/// Asks a yes/no question until one of the two is given
///
/// Closed input counts as no.
fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush()?;
        let Some(answer) = read_input(&mut stdin().lock())? else {
            println!();
            return Ok(false);
        };
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Asks for the player's colour, `None` if the input is closed first
fn ask_colour() -> Result<Option<Colour>> {
    loop {
        print!("Choose your colour, red or yellow? r/y: ");
        stdout().flush()?;
        let Some(answer) = read_input(&mut stdin().lock())? else {
            println!();
            return Ok(None);
        };
        match answer.to_lowercase().chars().next() {
            Some('r') => return Ok(Some(Colour::Red)),
            Some('y') => return Ok(Some(Colour::Yellow)),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play(depth: usize, colour: Option<Colour>, first: FirstMove, delay: Duration) -> Result<()> {
    println!("Welcome to Connect 4\n");

    let colour = match colour {
        Some(colour) => colour,
        None => match ask_colour()? {
            Some(colour) => colour,
            None => return Ok(()),
        },
    };

    let mut game = Game::new(first.pick(), depth);
    loop {
        if !play_round(&mut game, colour, delay)? {
            return Ok(());
        }

        if !ask_yes_no("Play again? y/n: ")? {
            return Ok(());
        }
        game.reset(first.pick());
    }
}

/// Runs the game loop until the game is over
///
/// Returns `false` if the player closed the input before the game ended.
fn play_round(game: &mut Game, colour: Colour, delay: Duration) -> Result<bool> {
    loop {
        display::draw(game.board(), colour)?;

        match game.outcome() {
            GameOutcome::InProgress => {}
            GameOutcome::Win(Side::Player) => {
                println!("You win!");
                return Ok(true);
            }
            GameOutcome::Win(Side::Bot) => {
                println!("The computer wins!");
                return Ok(true);
            }
            GameOutcome::Draw => {
                println!("Draw!");
                return Ok(true);
            }
        }

        match game.turn() {
            Side::Bot => {
                println!("Computer is thinking...");
                stdout().flush()?;
                std::thread::sleep(delay);

                let (column, _) = game.play_bot()?;
                println!("Computer plays column {}", column + 1);
            }
            Side::Player => {
                print!("Move input > ");
                stdout().flush()?;
                let Some(input_str) = read_input(&mut stdin().lock())? else {
                    println!();
                    return Ok(false);
                };

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!(
                            "Invalid move '{}', columns must be between 1 and {}",
                            input_str.trim(),
                            WIDTH
                        );
                        continue;
                    }
                };

                match game.play_human(column) {
                    Ok(_) => {}
                    Err(GameError::InvalidColumn(_)) => {
                        println!("Invalid move, column {} full", column + 1);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }
}
