//! TUI (Terminal User Interface) module for Ghost
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: implements `GameInterface`, owning the terminal and the
//!   current render state
//!
//! # State Machine
//! - `Playing`: letters play, ENTER challenges
//! - `GameOver`: ENTER starts a new game
//! Both states exit on ESC.

use crate::debug_log;
use crate::game_state::{GameInterface, GameOutcome, Player, UserAction};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const TILE_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Gray)
    .add_modifier(Modifier::BOLD);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const STATUS_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Clone, Copy, PartialEq, Debug)]
enum TuiState {
    Playing,
    GameOver,
}

/// Map a key press to a user action for the given state. Pure so the
/// bindings can be tested without a terminal.
fn key_to_action(state: TuiState, key: &KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match (state, key.code) {
        (_, KeyCode::Esc) => Some(UserAction::Exit),
        (TuiState::Playing, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
            Some(UserAction::Letter(c.to_ascii_lowercase()))
        }
        (TuiState::Playing, KeyCode::Enter) => Some(UserAction::Challenge),
        (TuiState::GameOver, KeyCode::Enter) => Some(UserAction::NewGame),
        _ => None,
    }
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    word: String,
    status: String,
    outcome: Option<GameOutcome>,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state: TuiState::Playing,
            word: String::new(),
            status: "Ready to play".to_string(),
            outcome: None,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let word = self.word.clone();
        let status = self.status.clone();
        let outcome = self.outcome.clone();
        let state = self.state;
        self.terminal.draw(|f| {
            Self::render_static(f, &word, &status, outcome.as_ref(), state);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(err) = self.draw() {
            debug_log!("Draw error: {}", err);
        }
    }

    fn render_static(
        f: &mut Frame,
        word: &str,
        status: &str,
        outcome: Option<&GameOutcome>,
        state: TuiState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // The growing word
                Constraint::Min(4),    // Status / outcome
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_word(f, chunks[1], word);
        Self::render_status(f, chunks[2], status, outcome);
        Self::render_instructions(f, chunks[3], state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new("GHOST")
            .style(HEADER_STYLE)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, word: &str) {
        let line = if word.is_empty() {
            Line::from(Span::styled(
                "(no letters yet)",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = Vec::new();
            for c in word.chars() {
                spans.push(Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    TILE_STYLE,
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };
        let paragraph = Paragraph::new(line)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().title("Word so far").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str, outcome: Option<&GameOutcome>) {
        let mut lines = vec![Line::from(Span::styled(status.to_string(), STATUS_STYLE))];
        if let Some(outcome) = outcome {
            let (verdict, style) = match outcome.winner {
                Player::Human => ("You win!", WIN_STYLE),
                Player::Computer => ("The computer wins!", LOSS_STYLE),
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(outcome.reason.clone(), style)));
            lines.push(Line::from(Span::styled(verdict, style)));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Status").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "Type a letter to play | ENTER: Challenge | ESC: Quit and save",
            TuiState::GameOver => "ENTER: New game | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl GameInterface for TuiInterface {
    fn display_word(&mut self, word: &str) {
        self.word = word.to_string();
        self.draw_or_log();
    }

    fn display_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            match event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    debug_log!("event poll error: {}", err);
                    return Some(UserAction::Exit);
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    debug_log!("event read error: {}", err);
                    return Some(UserAction::Exit);
                }
            };
            let Event::Key(key) = event else {
                continue;
            };
            // Only Press events count; Release and Repeat would double moves.
            if key.kind != event::KeyEventKind::Press {
                continue;
            }
            if let Some(action) = key_to_action(self.state, &key) {
                debug_log!("read_action() - mapped {:?} to {:?}", key.code, action);
                if action == UserAction::NewGame {
                    self.state = TuiState::Playing;
                    self.outcome = None;
                    self.draw_or_log();
                }
                return Some(action);
            }
        }
    }

    fn display_game_over(&mut self, outcome: &GameOutcome) {
        self.outcome = Some(outcome.clone());
        self.state = TuiState::GameOver;
        self.status = "Game over".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
