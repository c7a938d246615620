//! The back stack: an ordered sequence of screen entries, top = visible.

use super::intent::{NavOutcome, NavigationIntent};
use super::route::{Route, ScreenId};
use tracing::{debug, info};

/// A route together with the UI state owned by its screen instance.
#[derive(Debug)]
pub struct StackEntry<T> {
    pub route: Route,
    pub state: T,
}

impl<T> StackEntry<T> {
    pub fn new(route: Route, state: T) -> Self {
        Self { route, state }
    }
}

/// Back stack of screen entries.
///
/// The stack is never empty: it is created with a root entry and no
/// operation removes the last remaining entry except `replace_current`,
/// which pushes the replacement in the same step.
#[derive(Debug)]
pub struct BackStack<T> {
    entries: Vec<StackEntry<T>>,
}

impl<T> BackStack<T> {
    /// Create a stack holding only the root entry.
    pub fn new(root: Route, state: T) -> Self {
        Self {
            entries: vec![StackEntry::new(root, state)],
        }
    }

    /// Push a new entry with fresh state. Always succeeds.
    pub fn push(&mut self, route: Route, state: T) {
        debug!("push {}", route);
        self.entries.push(StackEntry::new(route, state));
    }

    /// Remove the top entry.
    ///
    /// Returns `None` when only the root is left; the root is never popped.
    pub fn pop(&mut self) -> Option<StackEntry<T>> {
        if self.entries.len() <= 1 {
            debug!("pop refused at root");
            return None;
        }
        self.entries.pop()
    }

    /// Remove entries from the top down to the first one matching `screen`.
    ///
    /// With `inclusive` the matching entry goes too, unless it is the root.
    /// When nothing matches the stack is cut back to the root entry.
    /// Returns the removed entries, topmost first.
    pub fn pop_up_to(&mut self, screen: ScreenId, inclusive: bool) -> Vec<StackEntry<T>> {
        let keep = match self.entries.iter().rposition(|e| e.route.matches(screen)) {
            Some(index) if inclusive => index.max(1),
            Some(index) => index + 1,
            None => {
                info!("pop_up_to({}) found no match, falling back to root", screen);
                1
            }
        };
        let mut removed: Vec<StackEntry<T>> = self.entries.drain(keep..).collect();
        removed.reverse();
        removed
    }

    /// Replace the current entry; depth never grows.
    ///
    /// Returns the entry that was replaced.
    pub fn replace_current(&mut self, route: Route, state: T) -> Option<StackEntry<T>> {
        debug!("replace with {}", route);
        let replaced = self.entries.pop();
        self.entries.push(StackEntry::new(route, state));
        replaced
    }

    /// The visible entry.
    pub fn current(&self) -> &StackEntry<T> {
        // Non-empty by construction.
        &self.entries[self.entries.len() - 1]
    }

    /// Mutable access to the top entry
    pub fn current_mut(&mut self) -> &mut StackEntry<T> {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Number of entries, never zero
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// True when only the root entry is left
    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// Routes from bottom to top.
    pub fn routes(&self) -> Vec<Route> {
        self.entries.iter().map(|e| e.route.clone()).collect()
    }

    /// Entries from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry<T>> {
        self.entries.iter()
    }

    /// Apply a navigation intent, building fresh state for new routes with `make`.
    ///
    /// Entries removed by the intent are passed to `on_removed` before being
    /// dropped, topmost first.
    pub fn apply<F, R>(&mut self, intent: NavigationIntent, mut make: F, mut on_removed: R) -> NavOutcome
    where
        F: FnMut(&Route) -> T,
        R: FnMut(StackEntry<T>),
    {
        let outcome = match intent {
            NavigationIntent::Push(route) => {
                let state = make(&route);
                self.push(route, state);
                NavOutcome::Changed
            }
            NavigationIntent::Pop => match self.pop() {
                Some(entry) => {
                    on_removed(entry);
                    NavOutcome::Changed
                }
                None => NavOutcome::AtRoot,
            },
            NavigationIntent::PopUpTo { screen, inclusive } => {
                let removed = self.pop_up_to(screen, inclusive);
                if removed.is_empty() {
                    NavOutcome::Unchanged
                } else {
                    removed.into_iter().for_each(&mut on_removed);
                    NavOutcome::Changed
                }
            }
            NavigationIntent::Replace(route) => {
                let state = make(&route);
                if let Some(entry) = self.replace_current(route, state) {
                    on_removed(entry);
                }
                NavOutcome::Changed
            }
        };
        info!(
            "navigation -> [{}]",
            self.routes()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> BackStack<()> {
        BackStack::new(Route::Login, ())
    }

    fn apply(stack: &mut BackStack<()>, intent: NavigationIntent) -> NavOutcome {
        stack.apply(intent, |_| (), |_| {})
    }

    #[test]
    fn test_push_depth_counts_root() {
        for n in 0..20 {
            let mut s = stack();
            for _ in 0..n {
                s.push(Route::Map, ());
            }
            assert_eq!(s.depth(), n + 1);
        }
    }

    #[test]
    fn test_pop_at_root_is_boundary() {
        let mut s = stack();
        assert!(s.pop().is_none());
        assert_eq!(s.depth(), 1);
        assert_eq!(apply(&mut s, NavigationIntent::Pop), NavOutcome::AtRoot);
        assert_eq!(s.current().route, Route::Login);
    }

    #[test]
    fn test_replace_never_grows() {
        let mut s = stack();
        s.replace_current(Route::Profile, ());
        assert_eq!(s.depth(), 1);
        s.push(Route::Drivers, ());
        s.replace_current(Route::Chat, ());
        assert_eq!(s.depth(), 2);
        assert_eq!(s.routes(), vec![Route::Profile, Route::Chat]);
    }

    #[test]
    fn test_pop_up_to_inclusive_leaves_entry_below_match() {
        let mut s = stack();
        s.replace_current(Route::Profile, ());
        s.push(Route::Map, ());
        s.push(Route::Drivers, ());
        s.push(Route::Chat, ());
        let removed = s.pop_up_to(ScreenId::Drivers, true);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].route, Route::Chat);
        assert_eq!(s.current().route, Route::Map);
    }

    #[test]
    fn test_pop_up_to_matches_topmost_occurrence() {
        let mut s = stack();
        s.push(Route::Map, ());
        s.push(Route::Profile, ());
        s.push(Route::Map, ());
        s.push(Route::Chat, ());
        s.pop_up_to(ScreenId::Map, false);
        assert_eq!(s.depth(), 4);
        assert_eq!(s.current().route, Route::Map);
    }

    #[test]
    fn test_pop_up_to_unmatched_falls_back_to_root() {
        let mut s = stack();
        s.push(Route::Register, ());
        s.push(Route::Map, ());
        assert_eq!(
            apply(
                &mut s,
                NavigationIntent::PopUpTo {
                    screen: ScreenId::Chat,
                    inclusive: false
                }
            ),
            NavOutcome::Changed
        );
        assert_eq!(s.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_pop_up_to_inclusive_on_root_keeps_root() {
        let mut s = stack();
        s.push(Route::Register, ());
        s.pop_up_to(ScreenId::Login, true);
        assert_eq!(s.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_pop_up_to_nothing_removed_is_unchanged() {
        let mut s = stack();
        s.push(Route::Map, ());
        let outcome = apply(
            &mut s,
            NavigationIntent::PopUpTo {
                screen: ScreenId::Map,
                inclusive: false,
            },
        );
        assert_eq!(outcome, NavOutcome::Unchanged);
        assert_eq!(s.depth(), 2);
    }

    #[test]
    fn test_route_params_are_kept_per_entry() {
        let mut s = stack();
        s.push(Route::route_to("Andino"), ());
        s.push(Route::route_to("Unicentro"), ());
        s.pop();
        assert_eq!(s.current().route, Route::route_to("Andino"));
    }

    #[test]
    fn test_session_scenario() {
        let mut s = stack();
        apply(&mut s, NavigationIntent::Replace(Route::Profile));
        assert_eq!(s.routes(), vec![Route::Profile]);
        apply(&mut s, NavigationIntent::Push(Route::Drivers));
        assert_eq!(s.routes(), vec![Route::Profile, Route::Drivers]);
        apply(&mut s, NavigationIntent::Push(Route::Chat));
        assert_eq!(s.routes(), vec![Route::Profile, Route::Drivers, Route::Chat]);
        apply(&mut s, NavigationIntent::Pop);
        assert_eq!(s.routes(), vec![Route::Profile, Route::Drivers]);
        apply(
            &mut s,
            NavigationIntent::PopUpTo {
                screen: ScreenId::Profile,
                inclusive: false,
            },
        );
        assert_eq!(s.routes(), vec![Route::Profile]);
    }

    #[test]
    fn test_apply_builds_state_and_reports_removed() {
        let mut s: BackStack<usize> = BackStack::new(Route::Login, 0);
        let mut counter = 0;
        let mut removed = Vec::new();
        s.apply(
            NavigationIntent::Push(Route::Map),
            |_| {
                counter += 1;
                counter
            },
            |e| removed.push(e.route),
        );
        assert_eq!(s.current().state, 1);
        s.apply(
            NavigationIntent::Replace(Route::Chat),
            |_| 7,
            |e| removed.push(e.route),
        );
        assert_eq!(s.current().state, 7);
        assert_eq!(removed, vec![Route::Map]);
    }
}
