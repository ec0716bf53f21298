//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::paths::NixciPaths;
use crate::config::settings::Settings;
use crate::models::SubmissionId;
use crate::navigation::{Navigator, Route, RouteStack};
use crate::submission::SubmissionLog;
use crate::welcome::WelcomeAction;

use super::views::register::RegisterFormState;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Modal for typing a new spoken language
    AddLanguage,
    /// Asks before throwing the draft away
    ConfirmDiscard,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a NixciPaths,

    /// Where submitted drafts are recorded
    pub submissions: SubmissionLog,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Visited screens
    pub routes: RouteStack,

    /// Highlighted button on the welcome screen
    pub welcome_selection: WelcomeAction,

    /// Registration form, present while the Register screen is open
    pub register: Option<RegisterFormState>,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Input of the add-language modal
    pub language_input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,

    /// ID of the submission made in this session
    pub last_submission: Option<SubmissionId>,
}

impl<'a> App<'a> {
    /// Create a new App instance on the welcome screen
    pub fn new(settings: &'a Settings, paths: &'a NixciPaths) -> Self {
        Self {
            settings,
            paths,
            submissions: SubmissionLog::new(paths.submission_log()),
            should_quit: false,
            routes: RouteStack::new(),
            welcome_selection: WelcomeAction::Register,
            register: None,
            active_dialog: ActiveDialog::default(),
            language_input: language_input(),
            status_message: None,
            notifications: NotificationQueue::new(),
            last_submission: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn current_route(&self) -> Route {
        self.routes.current()
    }

    /// Go to a screen. Opening Register always starts a fresh draft.
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Register {
            self.register = Some(RegisterFormState::new(&self.settings.default_language));
        }
        self.clear_status();
        self.routes.navigate(route);
    }

    /// Leave the current screen. Leaving Register discards the draft.
    pub fn back(&mut self) {
        if self.routes.back() && self.current_route() != Route::Register {
            self.register = None;
        }
        self.clear_status();
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddLanguage {
            self.language_input = language_input();
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Submit the open registration and move to Home
    ///
    /// The draft is consumed whether or not logging succeeds.
    pub fn submit_registration(&mut self) {
        let Some(form) = self.register.take() else {
            return;
        };

        match form.wizard.submit(&self.submissions, &mut self.routes) {
            Ok(id) => {
                self.last_submission = Some(id);
                self.notifications
                    .push(Notification::success(format!("Registration {} submitted", id)));
            }
            Err(e) => {
                self.notifications
                    .push(Notification::error(format!("Could not record registration: {}", e)));
                self.back();
            }
        }
    }
}

fn language_input() -> TextInput {
    TextInput::new()
        .label("Language")
        .placeholder("Enter language")
        .focused(true)
}
