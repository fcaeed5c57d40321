//! Single-game orchestration
//!
//! `Game` drives one round on top of the core rules: it checks each guess
//! with the validator and the dictionary, evaluates it against the secret,
//! and tracks how many guesses remain.

use crate::config::GameConfig;
use crate::core::{Dictionary, Feedback, Word, WordError, evaluate, score, validate};
use thiserror::Error;
use tracing::{debug, info};

/// Why a guess was not accepted
///
/// Rejected guesses do not count against the guess limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("'{guess}' is not a {word_length}-letter lowercase word")]
    InvalidFormat { guess: String, word_length: usize },

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),

    #[error("The game is already over")]
    GameOver,
}

/// Errors constructing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),

    #[error("Guess limit must be positive, got {0}")]
    InvalidGuessLimit(i32),
}

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { guesses: i32 },
    Lost,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub feedback: Feedback,
}

/// A single Wordle game
pub struct Game<'a> {
    secret: Word,
    dictionary: &'a Dictionary,
    config: GameConfig,
    history: Vec<Turn>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game with the given secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidSecret` if the secret is not a well-formed
    /// word of the configured length, and `GameError::InvalidGuessLimit` if
    /// the configuration allows no guesses.
    pub fn new(
        secret: &str,
        dictionary: &'a Dictionary,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if config.max_guesses <= 0 {
            return Err(GameError::InvalidGuessLimit(config.max_guesses));
        }

        let secret = Word::with_length(secret, config.word_length)?;
        debug!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            "new game"
        );

        Ok(Self {
            secret,
            dictionary,
            config,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// Returns a `GuessRejection` when the game has ended, the guess is
    /// malformed, or (if the config requires it) the guess is not in the
    /// dictionary. Rejections leave the game unchanged.
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, GuessRejection> {
        if self.status != GameStatus::InProgress {
            return Err(GuessRejection::GameOver);
        }

        if !validate(guess, self.config.word_length) {
            return Err(GuessRejection::InvalidFormat {
                guess: guess.to_string(),
                word_length: self.config.word_length,
            });
        }

        if self.config.require_dictionary_word && !self.dictionary.contains(guess) {
            return Err(GuessRejection::NotInDictionary(guess.to_string()));
        }

        let feedback = evaluate(self.secret.text(), guess);
        self.history.push(Turn {
            guess: guess.to_string(),
            feedback: feedback.clone(),
        });

        let used = self.guesses_used();
        if feedback.is_solved() {
            self.status = GameStatus::Won { guesses: used };
            info!(guesses = used, "game won");
        } else if used >= self.config.max_guesses {
            self.status = GameStatus::Lost;
            info!(guesses = used, "game lost");
        }

        Ok(feedback)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> i32 {
        self.history.len() as i32
    }

    #[must_use]
    pub fn remaining(&self) -> i32 {
        (self.config.max_guesses - self.guesses_used()).max(0)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret word
    ///
    /// Front ends should only reveal this once the game is over.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Score of the game so far: 0 unless won
    #[must_use]
    pub const fn score(&self) -> i32 {
        match self.status {
            GameStatus::Won { guesses } => score(guesses, self.config.max_guesses),
            GameStatus::InProgress | GameStatus::Lost => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn dictionary() -> Dictionary {
        Dictionary::new([
            "crane", "water", "waste", "pluck", "slate", "light", "music", "dream", "happy",
            "smile", "peace",
        ])
    }

    #[test]
    fn solving_first_try_scores_max() {
        let dict = dictionary();
        let mut game = Game::new("water", &dict, GameConfig::default()).unwrap();

        let feedback = game.submit("water").unwrap();

        assert!(feedback.is_solved());
        assert_eq!(game.status(), GameStatus::Won { guesses: 1 });
        assert_eq!(game.score(), 6);
        assert!(game.is_over());
    }

    #[test]
    fn feedback_is_recorded_in_history() {
        let dict = dictionary();
        let mut game = Game::new("water", &dict, GameConfig::default()).unwrap();

        let feedback = game.submit("waste").unwrap();
        let colors: Vec<Color> = feedback.colors().collect();
        assert_eq!(
            colors,
            [Color::Green, Color::Green, Color::Gray, Color::Yellow, Color::Yellow]
        );

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].guess, "waste");
        assert_eq!(game.remaining(), 5);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let dict = dictionary();
        let config = GameConfig::default().with_max_guesses(2);
        let mut game = Game::new("water", &dict, config).unwrap();

        game.submit("crane").unwrap();
        game.submit("pluck").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), 0);
        assert_eq!(game.remaining(), 0);
        assert_eq!(game.submit("water"), Err(GuessRejection::GameOver));
    }

    #[test]
    fn win_on_last_guess_scores_one() {
        let dict = dictionary();
        let mut game = Game::new("water", &dict, GameConfig::default()).unwrap();

        for guess in ["crane", "pluck", "slate", "light", "music"] {
            game.submit(guess).unwrap();
        }
        game.submit("water").unwrap();

        assert_eq!(game.status(), GameStatus::Won { guesses: 6 });
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn malformed_guess_is_rejected_without_using_a_turn() {
        let dict = dictionary();
        let mut game = Game::new("water", &dict, GameConfig::default()).unwrap();

        assert!(matches!(
            game.submit("Water"),
            Err(GuessRejection::InvalidFormat { .. })
        ));
        assert!(matches!(
            game.submit("waters"),
            Err(GuessRejection::InvalidFormat { word_length: 5, .. })
        ));
        assert!(matches!(
            game.submit("12345"),
            Err(GuessRejection::InvalidFormat { .. })
        ));
        assert_eq!(game.guesses_used(), 0);
    }

    #[test]
    fn unknown_word_is_rejected_when_required() {
        let dict = dictionary();
        let mut game = Game::new("water", &dict, GameConfig::default()).unwrap();

        assert_eq!(
            game.submit("zzzzz"),
            Err(GuessRejection::NotInDictionary("zzzzz".to_string()))
        );
        assert_eq!(game.guesses_used(), 0);
    }

    #[test]
    fn unknown_word_is_accepted_when_not_required() {
        let dict = dictionary();
        let config = GameConfig::default().with_dictionary_check(false);
        let mut game = Game::new("water", &dict, config).unwrap();

        let feedback = game.submit("zzzzz").unwrap();
        assert_eq!(feedback.count(Color::Gray), 5);
    }

    #[test]
    fn invalid_secret_is_an_error() {
        let dict = dictionary();
        assert!(matches!(
            Game::new("Water", &dict, GameConfig::default()),
            Err(GameError::InvalidSecret(_))
        ));
        assert!(matches!(
            Game::new("waters", &dict, GameConfig::default()),
            Err(GameError::InvalidSecret(_))
        ));
    }

    #[test]
    fn zero_guess_limit_is_an_error() {
        let dict = dictionary();
        let config = GameConfig::default().with_max_guesses(0);
        assert_eq!(
            Game::new("water", &dict, config).err(),
            Some(GameError::InvalidGuessLimit(0))
        );
    }

    #[test]
    fn custom_word_length() {
        let dict = Dictionary::new(["cat", "act", "dog"]);
        let config = GameConfig::default().with_word_length(3);
        let mut game = Game::new("cat", &dict, config).unwrap();

        assert_eq!(game.submit("act").unwrap().count(Color::Yellow), 2);
        assert!(game.submit("cat").unwrap().is_solved());
        assert_eq!(game.score(), 5);
    }
}
