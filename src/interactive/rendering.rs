//! TUI rendering with ratatui
//!
//! Three boards side by side, the human's keyboard, messages and input.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackCode, GuessRecord, KeyboardState, WORD_LENGTH};
use crate::game::{GameStatus, Lane, LaneKind, SecretSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SecretSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Boards
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let board_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    let reveal_all = app.session.status().is_over();
    for (kind, area) in LaneKind::ALL.into_iter().zip(board_chunks.iter()) {
        render_board(f, app, app.session.lane(kind), reveal_all, *area);
    }

    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_input(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE VERSUS - You vs LLM vs Bot")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn code_color(code: FeedbackCode) -> Color {
    match code {
        FeedbackCode::Correct => Color::Green,
        FeedbackCode::Present => Color::Yellow,
        FeedbackCode::Absent => Color::DarkGray,
    }
}

fn tile_spans(record: &GuessRecord, reveal: bool) -> Vec<Span<'static>> {
    record
        .word()
        .chars()
        .iter()
        .zip(record.feedback().codes())
        .flat_map(|(&letter, &code)| {
            let letter = if reveal { letter as char } else { ' ' };
            [
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(code_color(code))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_board<S: SecretSource>(
    f: &mut Frame,
    app: &App<'_, S>,
    lane: &Lane,
    reveal_all: bool,
    area: Rect,
) {
    let max_guesses = app.session.config().max_guesses;
    let reveal = reveal_all || lane.kind() == LaneKind::Human;
    let mut lines = Vec::with_capacity(max_guesses * 2);

    for (record, rationale) in lane.history().iter().zip(lane.rationales()) {
        lines.push(Line::from(tile_spans(record, reveal)));
        // Opponents' reasoning would give their letters away mid-game
        match rationale {
            Some(reason) if reveal && !reason.is_empty() => lines.push(Line::from(Span::styled(
                reason.clone(),
                Style::default().fg(Color::DarkGray),
            ))),
            _ => lines.push(Line::from("")),
        }
    }

    let empty_row = " _  ".repeat(WORD_LENGTH);
    for _ in lane.history().len()..max_guesses {
        lines.push(Line::from(Span::styled(
            empty_row.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let border_color = match app.session.status() {
        GameStatus::Won(winner) if winner == lane.kind() => Color::Green,
        _ if lane.kind() == LaneKind::Human => Color::Cyan,
        _ => Color::White,
    };

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(
                    " {} ({}/{}) ",
                    lane.kind().title(),
                    lane.history().len(),
                    max_guesses
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn render_keyboard<S: SecretSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let keyboard = KeyboardState::from_history(app.session.lane(LaneKind::Human).history());

    let lines: Vec<Line> = KeyboardState::ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let style = keyboard.get(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |code| Style::default().fg(Color::Black).bg(code_color(code)),
                    );
                    [
                        Span::styled(format!(" {} ", letter as char), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: SecretSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: SecretSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Waiting => (" Opponents are guessing... ", "", Color::DarkGray),
        InputMode::Guessing => (
            " Enter your guess (5 letters) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: SecretSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | You: {} | LLM: {} | Bot: {}",
        stats.total_games, stats.human_wins, stats.llm_wins, stats.bot_wins
    );
    f.render_widget(Paragraph::new(stats_text), chunks[0]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
