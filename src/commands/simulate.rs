//! Simulate many games in parallel
//!
//! Each game picks a random secret and is played by a simple player that
//! always guesses a random word consistent with all feedback so far. Games
//! are independent, so they run across the rayon thread pool.

use crate::config::GameConfig;
use crate::core::{Dictionary, evaluate, validate};
use crate::game::{Game, GameStatus, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games: usize,
    /// Base seed; each game derives its own RNG from it
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            game: GameConfig::default(),
            show_progress: true,
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub secret: String,
    pub guesses: Vec<String>,
    pub won: bool,
    pub score: i32,
}

/// Aggregate statistics for a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Winning guess count -> number of games
    pub guess_distribution: HashMap<i32, usize>,
    pub average_guesses: f64,
    pub average_score: f64,
    pub max_guesses: i32,
    pub seed: u64,
    pub duration: Duration,
}

/// Play a single game with a random consistent-guess player
///
/// Only well-formed words of the configured length are used as secrets or
/// guesses. Returns `None` when the word list has no such word.
#[must_use]
pub fn play_random_game(
    words: &[String],
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut impl Rng,
) -> Option<GameOutcome> {
    let mut candidates: Vec<&String> = words
        .iter()
        .filter(|w| validate(w, config.word_length))
        .collect();
    let secret = *candidates.choose(rng)?;
    let mut game = Game::new(secret, dictionary, config).ok()?;

    while !game.is_over() {
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };

        let Ok(feedback) = game.submit(guess) else {
            break;
        };

        // Keep only words that would have produced the same feedback
        candidates.retain(|&candidate| evaluate(candidate, guess) == feedback);
    }

    let won = matches!(game.status(), GameStatus::Won { .. });
    Some(GameOutcome {
        secret: secret.clone(),
        guesses: game
            .history()
            .iter()
            .map(|Turn { guess, .. }| guess.clone())
            .collect(),
        won,
        score: game.score(),
    })
}

/// Run the simulation
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_simulation(words: &[String], config: &SimulateConfig) -> SimulationStatistics {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let dictionary = Dictionary::new(words);

    info!(games = config.games, seed, "starting simulation");

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .filter_map(|index| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let outcome = play_random_game(words, &dictionary, config.game, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let stats = summarize(&outcomes, config.game.max_guesses, seed, duration);
    debug!(
        won = stats.won,
        lost = stats.lost,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );
    stats
}

fn summarize(
    outcomes: &[GameOutcome],
    max_guesses: i32,
    seed: u64,
    duration: Duration,
) -> SimulationStatistics {
    let mut guess_distribution: HashMap<i32, usize> = HashMap::new();
    let mut total_guesses = 0usize;
    let mut total_score = 0i64;

    for outcome in outcomes.iter().filter(|o| o.won) {
        *guess_distribution
            .entry(outcome.guesses.len() as i32)
            .or_insert(0) += 1;
        total_guesses += outcome.guesses.len();
    }
    for outcome in outcomes {
        total_score += i64::from(outcome.score);
    }

    let won = outcomes.iter().filter(|o| o.won).count();
    let total_games = outcomes.len();

    SimulationStatistics {
        total_games,
        won,
        lost: total_games - won,
        guess_distribution,
        average_guesses: if won > 0 {
            total_guesses as f64 / won as f64
        } else {
            0.0
        },
        average_score: if total_games > 0 {
            total_score as f64 / total_games as f64
        } else {
            0.0
        },
        max_guesses,
        seed,
        duration,
    }
}
