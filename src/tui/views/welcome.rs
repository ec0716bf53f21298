//! Welcome screen
//!
//! App name, pitch, and Sign In / Register buttons.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::welcome::{WelcomeAction, WELCOME_SUBTITLE, WELCOME_TITLE};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect_fixed(64, 11, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut buttons = Vec::new();
    for action in WelcomeAction::ALL {
        let style = if action == app.welcome_selection {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        buttons.push(Span::styled(format!("  {}  ", action.label()), style));
        buttons.push(Span::raw("   "));
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_SUBTITLE,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(buttons),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ choose  Enter select  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, card);
}

/// Handle key input on the welcome screen
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.welcome_selection = app.welcome_selection.toggle();
        }
        KeyCode::Char('s') => app.navigate(WelcomeAction::SignIn.route()),
        KeyCode::Char('r') => app.navigate(WelcomeAction::Register.route()),
        KeyCode::Enter => app.navigate(app.welcome_selection.route()),
        _ => return Ok(false),
    }
    Ok(true)
}
