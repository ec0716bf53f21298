//! Dialog modules for the TUI
//!
//! Modal dialogs shown over the current screen. While one is open it
//! receives every key.

pub mod confirm;
pub mod language;

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::app::{ActiveDialog, App};

/// Route a key to the active dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.active_dialog {
        ActiveDialog::AddLanguage => Ok(language::handle_key(app, key)),
        ActiveDialog::ConfirmDiscard => Ok(confirm::handle_key(app, key)),
        ActiveDialog::None => Ok(false),
    }
}
