//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_plain, feedback_tiles, feedback_to_emoji};
use crate::commands::{CheckResult, SimulationStatistics};
use crate::game::{Game, GameStatus};
use colored::Colorize;

/// Print the feedback for a single guess
pub fn print_check_result(result: &CheckResult) {
    if result.feedback.is_empty() {
        println!(
            "{}",
            format!(
                "Cannot evaluate: '{}' has {} letters, secret has {}",
                result.guess,
                result.guess.chars().count(),
                result.secret_length
            )
            .red()
        );
        return;
    }

    println!("\n  {}", feedback_tiles(&result.feedback));
    println!("  {}", feedback_to_emoji(&result.feedback));
    println!("  {}", feedback_plain(&result.feedback).bright_black());

    if !result.well_formed {
        println!(
            "\n  {}",
            "Note: guess does not follow the format rules".yellow()
        );
    }
    if result.feedback.is_solved() {
        println!("\n  {}", "Solved!".green().bold());
    }
}

/// Print whether a guess is well-formed and known
pub fn print_validation(guess: &str, well_formed: bool, in_dictionary: bool) {
    let mark = |ok: bool| {
        if ok {
            "yes".green()
        } else {
            "no".red()
        }
    };

    println!("Guess:          {guess}");
    println!("Well-formed:    {}", mark(well_formed));
    println!("In dictionary:  {}", mark(in_dictionary));
}

/// Print a score
pub fn print_score(guesses_used: i32, max_guesses: i32, score: i32) {
    if score == 0 {
        println!(
            "{guesses_used} is outside 1..={max_guesses} guesses: score {}",
            "0".red().bold()
        );
        return;
    }

    println!(
        "Solved in {guesses_used} of {max_guesses} guesses: score {}",
        score.to_string().bright_yellow().bold()
    );
}

/// Print the board of a game in progress
pub fn print_board(game: &Game<'_>) {
    for (i, turn) in game.history().iter().enumerate() {
        println!(
            "  {}  {}",
            (i + 1).to_string().bright_black(),
            feedback_tiles(&turn.feedback)
        );
    }
}

/// Print the end-of-game summary
pub fn print_game_summary(game: &Game<'_>) {
    println!("\n{}", "═".repeat(50).bright_cyan());

    match game.status() {
        GameStatus::Won { guesses } => {
            println!(
                "  {}",
                "🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold()
            );
            println!(
                "\n  Solution found in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("  {}", "Out of guesses".red().bold());
            println!(
                "\n  The word was {}",
                game.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {
            println!("  Game abandoned");
        }
    }

    println!(
        "  Score: {}",
        game.score().to_string().bright_yellow().bold()
    );

    println!("\n  Guess history:");
    for (i, turn) in game.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.to_uppercase().bright_white().bold(),
            feedback_to_emoji(&turn.feedback)
        );
    }

    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.total_games == 0 {
        println!("\nNo games were played.");
        return;
    }

    let win_rate = stats.won as f64 / stats.total_games as f64 * 100.0;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Won:              {} {}",
        stats.won,
        format!("({win_rate:.1}%)").green()
    );
    if stats.lost > 0 {
        println!("   Lost:             {}", stats.lost.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", stats.average_score).bright_yellow()
    );
    println!("   Seed:             {}", stats.seed);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let pct = count as f64 / stats.total_games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
