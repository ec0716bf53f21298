//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::dialogs;
use super::event::Event;
use super::views;
use crate::navigation::Route;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        dialogs::handle_key(app, key)?;
        return Ok(());
    }

    match app.current_route() {
        Route::Welcome => {
            if !views::welcome::handle_key(app, key)? {
                handle_global_key(app, key);
            }
        }
        Route::Register => {
            views::register::handle_key(app, key)?;
        }
        Route::Login => match key.code {
            KeyCode::Esc => app.back(),
            _ => handle_global_key(app, key),
        },
        Route::Home => handle_global_key(app, key),
    }

    Ok(())
}

/// Keys that work on every screen without text entry
fn handle_global_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
        app.quit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NixciPaths;
    use crate::config::settings::Settings;
    use crate::models::{AccountType, Field};
    use crate::tui::app::ActiveDialog;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NixciPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);
        app.navigate(Route::Register);

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_text_on_register() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NixciPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.current_route(), Route::Register);

        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.register.as_ref().unwrap().wizard.draft().first_name, "q");
    }

    #[test]
    fn test_esc_on_first_step_asks_before_leaving() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NixciPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);
        app.navigate(Route::Register);

        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDiscard);

        handle_key_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.current_route(), Route::Welcome);
        assert!(app.register.is_none());
    }

    #[test]
    fn test_keyboard_walkthrough_submits() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NixciPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);
        app.navigate(Route::Register);

        for value in ["Ada", "Lovelace", "ada@example.com", "Abcdef1!"] {
            type_text(&mut app, value);
            handle_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(
            app.register.as_ref().unwrap().step(),
            crate::wizard::Step::AccountType
        );

        handle_key_event(&mut app, key(KeyCode::Right)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Right)).unwrap();
        let form = app.register.as_ref().unwrap();
        assert_eq!(form.wizard.draft().account_type, Some(AccountType::Company));
        assert!(!form.wizard.errors().contains(Field::AccountType));

        // Steps 2 through 7 have no required fields beyond the account type
        for _ in 0..6 {
            handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        }

        assert_eq!(app.current_route(), Route::Home);
        assert!(app.last_submission.is_some());
        assert_eq!(app.submissions.entry_count().unwrap(), 1);
    }
}
