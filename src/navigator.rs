//! Drives the back stack of live screens.
//!
//! The navigator owns one screen instance per stack entry, forwards input and
//! ticks to the visible one, and runs the lifecycle hooks when intents change
//! the stack: `on_exit` for every removed entry, then `on_enter` for the new
//! top. Covered entries keep their state untouched.

use crate::navigation::{BackStack, NavOutcome, NavigationIntent, Route};
use crate::screens::{build_screen, Screen, ScreenAction, ScreenContext};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::warn;

/// Back stack of live screens plus their lifecycle
pub struct Navigator {
    stack: BackStack<Box<dyn Screen>>,
}

impl Navigator {
    /// Start on the login screen.
    pub fn new(ctx: &ScreenContext) -> Result<Self> {
        Self::with_root(Route::Login, ctx)
    }

    /// Start on `root`, running its `on_enter`
    pub fn with_root(root: Route, ctx: &ScreenContext) -> Result<Self> {
        let mut screen = build_screen(&root);
        screen.on_enter(ctx)?;
        Ok(Self {
            stack: BackStack::new(root, screen),
        })
    }

    /// Route of the visible screen
    pub fn current_route(&self) -> &Route {
        &self.stack.current().route
    }

    /// Bottom-to-top routes
    pub fn routes(&self) -> Vec<Route> {
        self.stack.routes()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The visible screen
    pub fn current_screen(&mut self) -> &mut dyn Screen {
        self.stack.current_mut().state.as_mut()
    }

    /// Whether the visible screen is capturing typed text
    pub fn is_input_focused(&self) -> bool {
        self.stack.current().state.is_input_focused()
    }

    /// Apply `intent`, running `on_exit` on removed screens and `on_enter` on the new top.
    pub fn navigate(&mut self, intent: NavigationIntent, ctx: &ScreenContext) -> Result<NavOutcome> {
        let mut removed = Vec::new();
        let outcome = self.stack.apply(intent, build_screen, |entry| removed.push(entry));

        for mut entry in removed {
            if let Err(e) = entry.state.on_exit(ctx) {
                warn!("on_exit failed for {}: {:#}", entry.route, e);
            }
        }
        if outcome == NavOutcome::Changed {
            self.current_screen().on_enter(ctx)?;
        }
        Ok(outcome)
    }

    /// Draw the visible screen
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        self.current_screen().render(frame, area, ctx)
    }

    /// Forward an input event to the visible screen
    pub fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        self.current_screen().handle_event(event, ctx)
    }

    /// Let the visible screen poll its background work
    pub fn tick(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        self.current_screen().tick(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::ScreenId;
    use crate::services::Services;
    use tokio::runtime::Handle;

    #[tokio::test]
    async fn test_navigator_scenario() {
        let config = Config::default();
        let services = Services::from_config(&config, Handle::current()).unwrap();
        let ctx = ScreenContext::new(&config, &services);
        let mut nav = Navigator::new(&ctx).unwrap();

        assert_eq!(
            nav.navigate(NavigationIntent::Replace(Route::Profile), &ctx).unwrap(),
            NavOutcome::Changed
        );
        nav.navigate(NavigationIntent::Push(Route::Drivers), &ctx).unwrap();
        nav.navigate(NavigationIntent::Push(Route::Chat), &ctx).unwrap();
        assert_eq!(nav.routes(), vec![Route::Profile, Route::Drivers, Route::Chat]);

        nav.navigate(NavigationIntent::Pop, &ctx).unwrap();
        assert_eq!(nav.current_route(), &Route::Drivers);

        nav.navigate(
            NavigationIntent::PopUpTo {
                screen: ScreenId::Profile,
                inclusive: false,
            },
            &ctx,
        )
        .unwrap();
        assert_eq!(nav.routes(), vec![Route::Profile]);

        assert_eq!(
            nav.navigate(NavigationIntent::Pop, &ctx).unwrap(),
            NavOutcome::AtRoot
        );
        assert_eq!(nav.depth(), 1);
    }
}
