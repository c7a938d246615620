//! Screen trait and associated types.
//!
//! Screens own their UI state, handle events by returning a [`ScreenAction`],
//! and never reach into each other. Navigation happens only through the
//! [`NavigationIntent`] carried by [`ScreenAction::Navigate`].

use crate::config::Config;
use crate::keymap::Action;
use crate::navigation::{NavigationIntent, Route};
use crate::services::Services;
use crate::utils::TextInput;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Shared, read-only resources handed to every screen call.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub services: &'a Services,
}

impl<'a> ScreenContext<'a> {
    /// Borrow the config and services for one call
    pub fn new(config: &'a Config, services: &'a Services) -> Self {
        Self { config, services }
    }

    /// Mapped action for `key`, with letters left alone while an input has focus.
    pub fn action_for(&self, key: &KeyEvent, input_focused: bool) -> Option<Action> {
        let action = self.config.keymap.action_for(key)?;
        if input_focused && !TextInput::is_action_allowed_when_focused(&action) {
            return None;
        }
        Some(action)
    }

    /// Footer hint built from the active keymap
    pub fn hint(&self, entries: &[(Action, &str)]) -> String {
        self.config.keymap.hint(entries)
    }
}

/// What a screen asks the app to do after an event or tick.
#[derive(Debug, Clone, Default)]
pub enum ScreenAction {
    #[default]
    None,
    Navigate(NavigationIntent),
    Toast(Toast),
    ShowHelp,
    Quit,
}

impl ScreenAction {
    /// Push `route` on top of the stack
    pub fn push(route: Route) -> Self {
        Self::Navigate(NavigationIntent::Push(route))
    }

    /// Replace the current screen with `route`
    pub fn replace(route: Route) -> Self {
        Self::Navigate(NavigationIntent::Replace(route))
    }

    /// Pop the current screen
    pub fn back() -> Self {
        Self::Navigate(NavigationIntent::Pop)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ScreenAction::None)
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::back())
///     }
/// }
/// ```
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Poll background work. Called once per loop iteration on the visible screen.
    fn tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    /// When true, printable keys are typed instead of mapped to actions.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called each time the screen becomes the visible one.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen's entry is removed from the stack.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}

/// Feed a key to a text input. Ctrl or Alt chords never insert text.
pub fn edit_input(input: &mut TextInput, key: &KeyEvent, action: Option<Action>) -> bool {
    let ctrl_alt = KeyModifiers::CONTROL | KeyModifiers::ALT;
    // AltGr (needed for '@' on some layouts) arrives as Ctrl+Alt
    let chord = key.modifiers.intersects(ctrl_alt) && !key.modifiers.contains(ctrl_alt);
    if action.is_none() && chord {
        return false;
    }
    input.handle_key(key.code, action)
}

/// Only key presses count; release and repeat events are ignored.
pub fn pressed_key(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Bottom-bar shortcuts shared by the map, drivers and chat screens.
pub fn bottom_bar(action: Action) -> Option<ScreenAction> {
    match action {
        Action::GoHome => Some(ScreenAction::push(Route::Map)),
        Action::Favorites => Some(ScreenAction::push(Route::Profile)),
        Action::Back => Some(ScreenAction::back()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_bar_intents() {
        assert!(matches!(
            bottom_bar(Action::GoHome),
            Some(ScreenAction::Navigate(NavigationIntent::Push(Route::Map)))
        ));
        assert!(matches!(
            bottom_bar(Action::Favorites),
            Some(ScreenAction::Navigate(NavigationIntent::Push(Route::Profile)))
        ));
        assert!(matches!(
            bottom_bar(Action::Back),
            Some(ScreenAction::Navigate(NavigationIntent::Pop))
        ));
        assert!(bottom_bar(Action::Confirm).is_none());
    }
}
