//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, GameStatus, LaneKind, SecretSource};
use crate::guesser::Guesser;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: SecretSource> {
    pub session: GameSession<'a, S>,
    pub guesser: Option<Box<dyn Guesser>>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// Opponents are taking their turns
    Waiting,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub human_wins: usize,
    pub llm_wins: usize,
    pub bot_wins: usize,
}

impl Statistics {
    fn record(&mut self, status: GameStatus) {
        self.total_games += 1;
        match status {
            GameStatus::Won(LaneKind::Human) => self.human_wins += 1,
            GameStatus::Won(LaneKind::Llm) => self.llm_wins += 1,
            GameStatus::Won(LaneKind::Bot) => self.bot_wins += 1,
            GameStatus::Exhausted | GameStatus::InProgress => {}
        }
    }
}

impl<'a, S: SecretSource> App<'a, S> {
    #[must_use]
    pub fn new(session: GameSession<'a, S>, guesser: Option<Box<dyn Guesser>>) -> Self {
        let mut app = Self {
            session,
            guesser,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        app.add_message(
            "Welcome! Race the LLM and the bot to the hidden word.",
            MessageStyle::Info,
        );
        if app.guesser.is_none() {
            app.add_message(
                "No external guesser configured; the LLM lane sits out.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Submit the typed guess for the human lane
    ///
    /// Returns true when the guess was accepted and the opponents should play.
    pub fn submit_guess(&mut self) -> bool {
        let input = self.input_buffer.clone();
        match self.session.submit_human_guess(&input) {
            Ok(record) => {
                self.input_buffer.clear();
                if record.is_solved() {
                    self.add_message("You found it!", MessageStyle::Success);
                }
                if self.guesser.is_some() && self.session.is_active(LaneKind::Llm) {
                    self.add_message("LLM is thinking...", MessageStyle::Info);
                }
                self.input_mode = InputMode::Waiting;
                true
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    /// Let the LLM and the bot take their turns, then settle the round
    pub fn play_opponents(&mut self) {
        if let Some(guesser) = self.guesser.as_deref_mut()
            && self.session.is_active(LaneKind::Llm)
            && let Err(e) = self.session.play_llm_turn(guesser)
        {
            self.add_message(&format!("LLM API error: {e}"), MessageStyle::Error);
        }

        if self.session.is_active(LaneKind::Bot)
            && let Err(e) = self.session.play_bot_turn()
        {
            self.add_message(&format!("Bot error: {e}"), MessageStyle::Error);
        }

        let status = self.session.finish_round();
        if status.is_over() {
            self.stats.record(status);
            self.input_mode = InputMode::GameOver;

            let headline = match status {
                GameStatus::Won(LaneKind::Human) => "🎉 You win! 🎉".to_string(),
                GameStatus::Won(kind) => format!("{} wins!", kind.title()),
                GameStatus::Exhausted | GameStatus::InProgress => "Out of guesses!".to_string(),
            };
            self.add_message(&headline, MessageStyle::Success);
            if let Some(secret) = self.session.revealed_secret() {
                let text = format!("The word was {secret}. Press 'n' for new game or 'q' to quit.");
                self.add_message(&text, MessageStyle::Info);
            }
        } else {
            self.input_mode = InputMode::Guessing;
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game() {
            Ok(()) => {
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SecretSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SecretSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if app.input_buffer.len() < WORD_LENGTH {
                            app.input_buffer.push(c.to_ascii_uppercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        if app.submit_guess() {
                            // Show the human's row before blocking on the opponents
                            terminal.draw(|f| super::rendering::ui(f, &app))?;
                            app.play_opponents();
                        }
                    }
                    _ => {}
                },
                InputMode::Waiting => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
