//! Simple interactive CLI mode
//!
//! Line-oriented versus game without the TUI.

use crate::error::GameError;
use crate::game::{GameSession, SecretSource};
use crate::guesser::Guesser;
use crate::output::{print_boards, print_game_over};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or if a
/// new game cannot be drawn.
pub fn run_simple<S: SecretSource>(
    session: &mut GameSession<'_, S>,
    mut guesser: Option<&mut dyn Guesser>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Versus - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("You, the LLM and the bot each hunt for the same five-letter word.");
    println!("Opponents' letters stay hidden until the game ends.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    if guesser.is_none() {
        println!("{}", "No external guesser configured; the LLM lane sits out.\n".yellow());
    }

    loop {
        let Some(input) = get_user_input("Your guess")? else {
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let llm = guesser.as_mut().map(|g| &mut **g as &mut dyn Guesser);
        let report = match session.play_round(&input, llm) {
            Ok(report) => report,
            Err(GameError::GameOver) => {
                println!("{}", "The game is over. Type 'new' or 'quit'.".yellow());
                continue;
            }
            Err(e) => {
                println!("{}", format!("❌ {e}").red());
                continue;
            }
        };

        for failure in [report.llm, report.bot].into_iter().flatten().filter_map(Result::err) {
            println!("{}", format!("⚠ {failure}").yellow());
        }

        print_boards(session);

        if report.status.is_over() {
            print_game_over(session);

            let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
