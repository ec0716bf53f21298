//! Add-language dialog
//!
//! Modal text field for adding a spoken language to the draft. The modal
//! closes after every add attempt, including ignored empty or duplicate
//! entries.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the add-language dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(44, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Language ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 2,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    };

    let lines = vec![
        app.language_input.line(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Add  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Handle key input for the add-language dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.language_input;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let language = input.value().trim().to_string();
            if let Some(form) = app.register.as_mut() {
                if !form.wizard.add_language(&language) && !language.is_empty() {
                    app.set_status(format!("{} is already listed", language));
                }
            }
            app.close_dialog();
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    true
}
