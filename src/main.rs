//! Wordle Versus - CLI
//!
//! Play Wordle against a language-model agent and a rule-based bot, or run
//! the bot on its own.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use wordle_versus::{
    GameConfig,
    commands::{run_benchmark, run_simple, solve_word},
    config::DEFAULT_MAX_GUESSES,
    core::Word,
    game::{FixedSecret, GameSession, RandomSecret, SecretSource},
    guesser::{CommandGuesser, Guesser},
    output::{print_benchmark_result, print_solve_result},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_versus",
    about = "Race a language model and a rule-based bot to the same Wordle secret",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Line-delimited list of possible secrets
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Line-delimited list of extra accepted guesses
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Bot's first guess
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Guesses per lane
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible secret draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play against a fixed secret instead of a random one
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Program that answers guess requests for the LLM lane
    #[arg(long, global = true)]
    guesser: Option<String>,

    /// Argument passed to the guesser program (repeatable)
    #[arg(long = "guesser-arg", global = true, allow_hyphen_values = true)]
    guesser_args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented game without the TUI)
    Simple,

    /// Run the bot alone against a chosen secret
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the bot over the answer list
    Benchmark {
        /// Number of answer words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every answer word
        #[arg(short, long, conflicts_with = "count")]
        all: bool,
    },
}

fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let answers = load_from_file(&cli.answers)
        .with_context(|| format!("failed to read answer list {}", cli.answers.display()))?;
    if answers.is_empty() {
        bail!("answer list {} has no valid words", cli.answers.display());
    }

    // A missing allowed list only narrows the human's vocabulary to the answers
    let allowed = match load_from_file(&cli.allowed) {
        Ok(words) => words,
        Err(e) => {
            warn!("could not read {}: {e}", cli.allowed.display());
            Vec::new()
        }
    };

    info!(
        "{} answer words, {} allowed words",
        answers.len(),
        allowed.len()
    );
    Ok(Dictionary::new(&allowed, answers))
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    if cli.max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let mut config = GameConfig::default().with_max_guesses(cli.max_guesses);
    if let Some(opener) = &cli.opener {
        let opener = Word::new(opener.as_str()).with_context(|| format!("invalid opener {opener}"))?;
        config = config.with_opener(opener);
    }
    Ok(config)
}

fn build_secret_source(cli: &Cli) -> Result<Box<dyn SecretSource>> {
    if let Some(secret) = &cli.secret {
        let word = Word::new(secret.as_str()).with_context(|| format!("invalid secret {secret}"))?;
        return Ok(Box::new(FixedSecret(word)));
    }

    Ok(match cli.seed {
        Some(seed) => Box::new(RandomSecret::seeded(seed)),
        None => Box::new(RandomSecret::from_os_rng()),
    })
}

fn build_guesser(cli: &Cli) -> Option<Box<dyn Guesser>> {
    cli.guesser.as_ref().map(|program| {
        Box::new(CommandGuesser::new(program.as_str(), cli.guesser_args.clone()))
            as Box<dyn Guesser>
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli)?;
    let config = build_config(&cli)?;

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, &dictionary, config),
        Some(Commands::Simple) => run_simple_command(&cli, &dictionary, config),
        Some(Commands::Solve { word, verbose }) => {
            run_solve_command(word, *verbose, &dictionary, &config)
        }
        Some(Commands::Benchmark { count, all }) => {
            run_benchmark_command(*count, *all, &dictionary, &config);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_versus::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, config, build_secret_source(cli)?)?;
    let app = App::new(session, build_guesser(cli));
    run_tui(app)
}

fn run_simple_command(cli: &Cli, dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(dictionary, config, build_secret_source(cli)?)?;
    let mut guesser = build_guesser(cli);
    run_simple(
        &mut session,
        guesser.as_mut().map(|g| &mut **g as &mut dyn Guesser),
    )
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    dictionary: &Dictionary,
    config: &GameConfig,
) -> Result<()> {
    let target = Word::new(word).with_context(|| format!("invalid target word {word}"))?;
    if !dictionary.answers().contains(&target) {
        warn!("{target} is not in the answer list; the bot cannot find it");
    }

    let result = solve_word(&target, dictionary.answers(), config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, all: bool, dictionary: &Dictionary, config: &GameConfig) {
    let answers = dictionary.answers();
    let count = if all { answers.len() } else { count.min(answers.len()) };
    println!("Running benchmark on {count} answer words...");

    let result = run_benchmark(answers, &answers[..count], config, true);
    print_benchmark_result(&result);
}
