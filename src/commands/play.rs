//! Interactive game mode
//!
//! Text-based game loop on stdin/stdout.

use crate::config::GameConfig;
use crate::core::Dictionary;
use crate::game::Game;
use crate::output::{print_board, print_game_summary};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use rand::prelude::IndexedRandom;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Pick the secret for a new game
///
/// An explicit secret is used as-is (the game validates it); otherwise a
/// random word of the configured length is drawn from `words`.
///
/// # Errors
///
/// Returns an error if no word of the configured length is available.
pub fn choose_secret(words: &[String], config: &GameConfig, secret: Option<&str>) -> Result<String> {
    if let Some(secret) = secret {
        return Ok(secret.to_string());
    }

    let pool: Vec<&String> = words
        .iter()
        .filter(|w| w.chars().count() == config.word_length)
        .collect();

    match pool.choose(&mut rand::rng()) {
        Some(word) => Ok((*word).clone()),
        None => bail!("No {}-letter words available", config.word_length),
    }
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if the secret is invalid.
pub fn run_play(words: &[String], config: GameConfig, secret: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    run_play_with(words, config, secret, &mut stdin.lock())
}

/// Run the game loop reading guesses from `input`
///
/// Guesses are trimmed and lowercased before they reach the game. Typing
/// `quit` ends the game early.
///
/// # Errors
///
/// Returns an error on I/O failure or if the secret is invalid.
pub fn run_play_with<R: BufRead>(
    words: &[String],
    config: GameConfig,
    secret: Option<&str>,
    input: &mut R,
) -> Result<()> {
    let dictionary = Dictionary::new(words);
    let secret = choose_secret(words, &config, secret)?;
    let mut game = Game::new(&secret, &dictionary, config).context("Could not start game")?;

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║                    Wordle                    ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type 'quit' to give up.\n",
        config.word_length, config.max_guesses
    );

    while !game.is_over() {
        let Some(line) = prompt(
            &format!("Guess {}/{}", game.guesses_used() + 1, config.max_guesses),
            input,
        )?
        else {
            debug!("input closed");
            break;
        };

        let guess = line.to_lowercase();
        if matches!(guess.as_str(), "quit" | "q" | "exit") {
            break;
        }

        match game.submit(&guess) {
            Ok(_) => {
                println!();
                print_board(&game);
                println!();
            }
            Err(rejection) => {
                warn!(%rejection, "guess rejected");
                println!("❌ {}\n", rejection.to_string().red());
            }
        }
    }

    print_game_summary(&game);
    Ok(())
}

/// Prompt and read one trimmed line; `None` on end of input
fn prompt<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read guess")?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
