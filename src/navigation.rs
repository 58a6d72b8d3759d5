use std::fmt;

use crate::output;

/// Destinations the form can move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ShowUsers,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::ShowUsers => "/show-user",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Announces the destination on the terminal.
#[derive(Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(route = route.path(), "navigating");
        // The JSON outcome already implies the destination.
        if !output::is_json_output() {
            output::print_message(&format!("Next: {route}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_users_path() {
        assert_eq!(Route::ShowUsers.path(), "/show-user");
        assert_eq!(Route::ShowUsers.to_string(), "/show-user");
    }
}
