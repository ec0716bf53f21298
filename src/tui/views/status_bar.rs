//! Status bar view
//!
//! Shows the current route, the wizard step, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::navigation::Route;
use crate::wizard::Step;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.current_route()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(form) = app.register.as_ref() {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("Step {}/{} ", form.step().number(), Step::ALL.len()),
            Style::default().fg(Color::White),
        ));
        let error_count = form.wizard.errors().len();
        if error_count > 0 {
            spans.push(Span::styled(
                format!("({} error(s)) ", error_count),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.current_route() {
        Route::Register => " Ctrl+C:Quit ",
        _ => " q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
