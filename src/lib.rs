//! Wordle Rules
//!
//! Core rules for a Wordle-style word-guessing game: guess validation,
//! letter-by-letter feedback against a secret word, dictionary membership
//! and scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rules::core::{Color, evaluate, is_valid_word, score, validate};
//!
//! let words = ["crane", "water", "waste"];
//!
//! assert!(validate("waste", 5));
//! assert!(is_valid_word("waste", &words));
//!
//! let feedback = evaluate("water", "waste");
//! assert_eq!(feedback.count(Color::Green), 2);
//! assert_eq!(feedback.to_emoji(), "🟩🟩⬜🟨🟨");
//!
//! assert_eq!(score(3, 6), 4);
//! ```

// Core rules
pub mod core;

// Game configuration
pub mod config;

// Single-game orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
