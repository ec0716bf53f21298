//! Sign-in screen
//!
//! Authentication is handled elsewhere; this screen only marks the route.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect) {
    let card = centered_rect_fixed(50, 7, area);

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(""),
        Line::from("Sign in is not available in this client."),
        Line::from(""),
        Line::from("Esc to go back"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(paragraph, card);
}
