//! List navigation helpers for `ListState`.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` with the moves the list screens share.
pub trait ListStateExt {
    /// Move up, wrapping from the first item to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Move down, wrapping from the last item to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside `0..total_items` after the list shrank or grew.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = if current == 0 {
            total_items - 1
        } else {
            current - 1
        };
        self.select(Some(new_index));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let new_index = match self.selected() {
            Some(current) if current + 1 < total_items => current + 1,
            Some(_) => 0,
            None => 0,
        };
        self.select(Some(new_index));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.min(total_items - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_both_ways() {
        let mut state = ListState::default();
        state.select(Some(0));
        state.select_previous_wrap(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next_wrap(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_next_from_nothing_selects_first() {
        let mut state = ListState::default();
        state.select_next_wrap(4);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_filter() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.clamp_to(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp_to(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut state = ListState::default();
        state.select_next_wrap(0);
        state.select_last_item(0);
        assert_eq!(state.selected(), None);
    }
}
