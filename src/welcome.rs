//! Welcome screen content
//!
//! The first screen a user sees: the app name, a short pitch and the two
//! ways forward.

use crate::navigation::Route;

/// Application name
pub const APP_NAME: &str = "NixCI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WELCOME_TITLE: &str = "Welcome to NixCI";

pub const WELCOME_SUBTITLE: &str = "Professional Construction Management at your fingertips";

/// Actions offered on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    SignIn,
    Register,
}

impl WelcomeAction {
    pub const ALL: [Self; 2] = [Self::SignIn, Self::Register];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Register",
        }
    }

    /// Where the action leads
    pub fn route(&self) -> Route {
        match self {
            Self::SignIn => Route::Login,
            Self::Register => Route::Register,
        }
    }

    /// Toggle between the two buttons
    pub fn toggle(&self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_route() {
        assert_eq!(WelcomeAction::SignIn.route(), Route::Login);
        assert_eq!(WelcomeAction::Register.route(), Route::Register);
        assert_eq!(WelcomeAction::SignIn.toggle(), WelcomeAction::Register);
    }
}
