//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or line mode, or replay guesses against a chosen answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_guesses},
    dictionary::Dictionary,
    game::{GameConfig, GameEngine, MAX_GUESSES, WORD_LENGTH},
    output::print_score_report,
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word, one scored letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word; every dictionary word must match
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Scored guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for answer selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score guesses against a chosen answer
    Score {
        /// The answer to play against (must be in the word list)
        answer: String,

        /// Guesses to submit, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// Logging is off unless `WORDLE_LOG` is set; output goes to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WORDLE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary named by the -w flag
fn load_dictionary(wordlist: &str, word_length: usize) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::new(WORDS, word_length)?,
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            Dictionary::new(words, word_length)
                .with_context(|| format!("Invalid word list '{path}'"))?
        }
    };
    info!(words = dictionary.len(), source = wordlist, "dictionary ready");
    Ok(dictionary)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.word_length, cli.max_guesses);
    let dictionary = load_dictionary(&cli.wordlist, config.word_length)?;
    let rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut engine = GameEngine::with_rng(dictionary, config, rng)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(&mut engine),
        Commands::Score { answer, guesses } => {
            let report = score_guesses(&mut engine, &answer, &guesses)?;
            print_score_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(engine: GameEngine) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
