//! Terminal User Interface module
//!
//! Hosts the onboarding flow in the terminal using ratatui: the welcome
//! screen, the seven-step registration wizard, and the screens it can
//! navigate to.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
