//! Wordle - CLI
//!
//! Play Wordle in the terminal, or run the rules directly: check a guess,
//! validate a word, compute a score, or simulate many games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use wordle_rules::{
    commands::{SimulateConfig, check_guess, run_play, run_simulation},
    config::GameConfig,
    core::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, Dictionary, score, validate},
    logging::init_logging,
    output::{print_check_result, print_score, print_simulation_statistics, print_validation},
    wordlists::loader::{load_bundled, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle rules engine: play, check guesses, score games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Maximum number of guesses per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: i32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Use this secret instead of a random word
        #[arg(short, long)]
        secret: Option<String>,

        /// Accept well-formed guesses that are not in the word list
        #[arg(long)]
        allow_any: bool,
    },

    /// Show the feedback for one guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Check that a guess is well-formed and in the word list
    Validate {
        /// The guess to validate
        guess: String,
    },

    /// Compute the score for a game solved in the given number of guesses
    Score {
        /// Number of guesses used
        #[arg(allow_negative_numbers = true)]
        guesses_used: i32,
    },

    /// Play many random games in parallel and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str, word_length: usize) -> Result<Vec<String>> {
    match wordlist {
        "bundled" => Ok(load_bundled(word_length)?),
        path => Ok(load_from_file(path, word_length)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_words(&cli.wordlist, cli.length)?;
    debug!(count = words.len(), wordlist = %cli.wordlist, "word list ready");

    let config = GameConfig::default()
        .with_word_length(cli.length)
        .with_max_guesses(cli.max_guesses);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        allow_any: false,
    });

    match command {
        Commands::Play { secret, allow_any } => {
            let config = config.with_dictionary_check(!allow_any);
            run_play(&words, config, secret.as_deref())
        }
        Commands::Check { secret, guess } => {
            let dictionary = Dictionary::new(&words);
            print_check_result(&check_guess(&secret, &guess, &dictionary));
            Ok(())
        }
        Commands::Validate { guess } => {
            let dictionary = Dictionary::new(&words);
            print_validation(
                &guess,
                validate(&guess, config.word_length),
                dictionary.contains(&guess),
            );
            Ok(())
        }
        Commands::Score { guesses_used } => {
            print_score(
                guesses_used,
                config.max_guesses,
                score(guesses_used, config.max_guesses),
            );
            Ok(())
        }
        Commands::Simulate { count, seed } => {
            let simulate = SimulateConfig {
                seed,
                game: config,
                ..SimulateConfig::new(count)
            };
            let stats = run_simulation(&words, &simulate);
            print_simulation_statistics(&stats);
            Ok(())
        }
    }
}
