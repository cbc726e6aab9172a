//! Display functions for command results

use super::formatters::{create_progress_bar, keyboard_lines, record_tiles};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::KeyboardState;
use crate::game::{GameSession, GameStatus, LaneKind, SecretSource};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.word,
            step.feedback.to_emoji(),
            step.rationale.bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&guess_count, &count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for word in result.failures.iter().take(20) {
            println!("   • {word}");
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}

/// Print every lane's board
///
/// Only the human's letters are shown until the game is over.
pub fn print_boards<S: SecretSource>(session: &GameSession<'_, S>) {
    let reveal_all = session.status().is_over();

    for kind in LaneKind::ALL {
        let lane = session.lane(kind);
        println!("\n{}", kind.title().bright_cyan().bold());

        for (record, rationale) in lane.history().iter().zip(lane.rationales()) {
            let reveal = reveal_all || kind == LaneKind::Human;
            match rationale {
                Some(reason) if reveal && !reason.is_empty() => println!(
                    "  {}  {}",
                    record_tiles(record, reveal),
                    reason.bright_black()
                ),
                _ => println!("  {}", record_tiles(record, reveal)),
            }
        }
    }

    println!();
    for line in keyboard_lines(&KeyboardState::from_history(
        session.lane(LaneKind::Human).history(),
    )) {
        println!("  {line}");
    }
}

/// Print the end-of-game banner
pub fn print_game_over<S: SecretSource>(session: &GameSession<'_, S>) {
    let secret = session
        .revealed_secret()
        .map(ToString::to_string)
        .unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won(LaneKind::Human) => {
            println!("{}", "    🎉  You win!  🎉".bright_green().bold());
        }
        GameStatus::Won(kind) => {
            println!("{}", format!("    {} wins!", kind.title()).bright_yellow().bold());
        }
        GameStatus::Exhausted | GameStatus::InProgress => {
            println!("{}", "    Out of guesses".red().bold());
        }
    }
    println!("    The word was {}", secret.bright_white().bold());
    println!("{}", "═".repeat(60).bright_cyan());
}
