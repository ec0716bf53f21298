//! TUI Views module
//!
//! One view per route, plus the header and status bar shared by all of them.

pub mod home;
pub mod login;
pub mod register;
pub mod status_bar;
pub mod welcome;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;
use crate::navigation::Route;
use crate::welcome::{APP_NAME, APP_VERSION};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.current_route() {
        Route::Welcome => welcome::render(frame, app, layout.body),
        Route::Login => login::render(frame, layout.body),
        Route::Register => register::render(frame, app, layout.body),
        Route::Home => home::render(frame, app, layout.body),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    render_notification(frame, app);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled(
            app.current_route().name(),
            Style::default().fg(Color::White),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddLanguage => dialogs::language::render(frame, app),
        ActiveDialog::ConfirmDiscard => {
            dialogs::confirm::render(frame, dialogs::confirm::DISCARD_DRAFT_MESSAGE)
        }
        ActiveDialog::None => {}
    }
}

/// Toast in the top-right corner
fn render_notification(frame: &mut Frame, app: &App) {
    let Some(notification) = app.notifications.current() else {
        return;
    };

    let area = frame.area();
    let width = 44.min(area.width);
    let rect = Rect::new(area.x + area.width - width, area.y + 1, width, 4.min(area.height));
    frame.render_widget(NotificationWidget::new(notification), rect);
}
