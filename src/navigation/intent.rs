//! Navigation intents raised by screens.

use super::route::{Route, ScreenId};

/// Instruction produced by a screen's exit event.
///
/// Intents are consumed immediately by the back stack and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Open `route` on top of the current screen.
    Push(Route),
    /// Go back one screen.
    Pop,
    /// Drop screens until the first one matching `screen`.
    PopUpTo { screen: ScreenId, inclusive: bool },
    /// Swap the current screen for `route` so back navigation cannot return to it.
    Replace(Route),
}

/// Result of applying an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The stack changed and the top entry may be different.
    Changed,
    /// The intent was valid but removed nothing.
    Unchanged,
    /// The intent would have popped the root entry; nothing changed.
    AtRoot,
}

impl NavOutcome {
    /// True when a pop hit the root
    pub fn is_boundary(&self) -> bool {
        matches!(self, NavOutcome::AtRoot)
    }
}
