//! Focus cycling for forms: fields first, then buttons.

/// Cycles through a fixed list of focus targets, wrapping at both ends.
#[derive(Debug, Clone)]
pub struct FocusRing<T: 'static> {
    targets: &'static [T],
    index: usize,
}

impl<T: Copy + PartialEq + 'static> FocusRing<T> {
    /// `targets` must not be empty
    pub fn new(targets: &'static [T]) -> Self {
        debug_assert!(!targets.is_empty());
        Self { targets, index: 0 }
    }

    /// The focused element
    pub fn current(&self) -> T {
        self.targets[self.index]
    }

    pub fn is(&self, target: T) -> bool {
        self.current() == target
    }

    /// Focus the next element, wrapping to the first
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.targets.len();
    }

    /// Focus the previous element, wrapping to the last
    pub fn prev(&mut self) {
        self.index = (self.index + self.targets.len() - 1) % self.targets.len();
    }

    /// Jump to `target`; unknown targets leave focus where it is
    pub fn focus(&mut self, target: T) {
        if let Some(index) = self.targets.iter().position(|t| *t == target) {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        A,
        B,
        C,
    }

    const FIELDS: &[Field] = &[Field::A, Field::B, Field::C];

    #[test]
    fn test_wraps_both_ways() {
        let mut ring = FocusRing::new(FIELDS);
        assert!(ring.is(Field::A));
        ring.prev();
        assert!(ring.is(Field::C));
        ring.next();
        assert!(ring.is(Field::A));
    }

    #[test]
    fn test_focus_jumps() {
        let mut ring = FocusRing::new(FIELDS);
        ring.focus(Field::B);
        ring.next();
        assert_eq!(ring.current(), Field::C);
    }
}
