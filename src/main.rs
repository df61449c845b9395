//! Wordle Game - CLI
//!
//! Play Wordle in a terminal UI or line mode, score single guesses, or run
//! self-play simulations.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{SimulationConfig, run_simple, run_simulation, score_guess},
    game::{GameSession, RandomSelector},
    output::{print_score_result, print_simulation_result},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, no TUI)
    Simple,

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play many games with a naive player and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `-v`. The TUI stays at `warn` unless asked, so log
/// lines do not draw over the screen.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Dictionary::embedded().context("embedded word list is invalid"),
        path => load_from_file(path),
    }
}

fn selector(seed: Option<u64>) -> RandomSelector {
    seed.map_or_else(RandomSelector::from_os_rng, RandomSelector::seeded)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.seed),
        Commands::Simple => {
            run_simple(&dictionary, selector(cli.seed)).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { secret, guess } => {
            let result =
                score_guess(&dictionary, &secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simulate { count } => run_simulate_command(&dictionary, count, cli.seed),
    }
}

fn run_simulate_command(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {count} games (seed {seed})...");

    let result = run_simulation(dictionary, &SimulationConfig::new(count, seed))?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let session = GameSession::start(dictionary, selector(seed))?;
    run_tui(App::new(session))
}
