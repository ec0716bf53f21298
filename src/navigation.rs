//! Navigation between onboarding screens
//!
//! The wizard only ever asks to go somewhere by name; whatever hosts it
//! decides what that means.

use std::fmt;

/// Named destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    Login,
    Register,
    Home,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Home => "Home",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives navigation requests. Requests carry no parameters and return
/// nothing.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// A stack of visited routes rooted at the welcome screen
#[derive(Debug, Clone)]
pub struct RouteStack {
    stack: Vec<Route>,
}

impl RouteStack {
    pub fn new() -> Self {
        Self::with_root(Route::Welcome)
    }

    pub fn with_root(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// The route on top of the stack
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Welcome)
    }

    /// Pop the current route. The root is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteStack {
    fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }
}
