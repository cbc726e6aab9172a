//! Benchmark command
//!
//! Plays the bot against many secrets in parallel and summarizes how it did.

use super::solve::solve_word;
use crate::config::GameConfig;
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved words
    pub distribution: HashMap<usize, usize>,
    /// Words the bot did not solve within the budget
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the bot on every word in `target_words`
///
/// Averages and the distribution only count solved words.
#[must_use]
pub fn run_benchmark(
    answer_words: &[Word],
    target_words: &[Word],
    config: &GameConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(&Word, Option<usize>)> = target_words
        .par_iter()
        .map(|target| {
            let solved_in = match solve_word(target, answer_words, config) {
                Ok(result) if result.success => Some(result.guesses.len()),
                Ok(_) => None,
                Err(e) => {
                    warn!("bot failed on {target}: {e}");
                    None
                }
            };
            pb.inc(1);
            (target, solved_in)
        })
        .collect();

    pb.finish_with_message("done");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    for (target, solved_in) in &outcomes {
        match solved_in {
            Some(guesses) => *distribution.entry(*guesses).or_insert(0) += 1,
            None => failures.push((*target).clone()),
        }
    }

    let solved: Vec<usize> = outcomes.iter().filter_map(|(_, g)| *g).collect();
    let total_guesses: usize = solved.iter().sum();
    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        solved: solved.len(),
        total_guesses,
        average_guesses: if solved.is_empty() {
            0.0
        } else {
            total_guesses as f64 / solved.len() as f64
        },
        min_guesses: solved.iter().copied().min().unwrap_or(0),
        max_guesses: solved.iter().copied().max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn answers() -> Vec<Word> {
        words_from_slice(&[
            "crane", "crate", "trace", "grace", "brace", "irate", "grate", "slate",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let answers = answers();
        let result = run_benchmark(&answers, &answers, &GameConfig::default(), false);

        assert_eq!(result.total_words, answers.len());
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let answers = answers();
        let result = run_benchmark(&answers, &answers, &GameConfig::default(), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn benchmark_counts_failures() {
        let answers = answers();
        let targets = words_from_slice(&["crane", "zesty"]);
        let result = run_benchmark(&answers, &targets, &GameConfig::default(), false);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failures, words_from_slice(&["zesty"]));
    }

    #[test]
    fn benchmark_empty_word_list() {
        let answers = answers();
        let result = run_benchmark(&answers, &[], &GameConfig::default(), false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let answers = answers();
        let result = run_benchmark(&answers, &answers, &GameConfig::default(), false);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }
}
