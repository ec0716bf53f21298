//! Home screen
//!
//! Landing page after a successful registration.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect_fixed(56, 9, area);

    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let reference = match app.last_submission {
        Some(id) => format!("Reference: {}", id),
        None => String::new(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Registration complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(reference, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, card);
}
