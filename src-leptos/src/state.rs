//! Per-card UI state

/// Expansion flag of one venture card.
///
/// Each `ProjectCard` owns its own value; cards never share or index into
/// a common collection, so toggling one card cannot affect another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardExpansion {
    expanded: bool,
}

impl CardExpansion {
    /// Collapsed, as every card starts on mount.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Chevron rotation mirroring the flag.
    pub fn chevron_degrees(&self) -> u16 {
        if self.expanded {
            180
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = CardExpansion::new();
        assert!(!state.is_expanded());
        assert_eq!(state.chevron_degrees(), 0);
    }

    #[test]
    fn test_toggle_expands_then_collapses() {
        let mut state = CardExpansion::new();
        state.toggle();
        assert!(state.is_expanded());
        assert_eq!(state.chevron_degrees(), 180);
        state.toggle();
        assert!(!state.is_expanded());
        assert_eq!(state.chevron_degrees(), 0);
    }

    #[test]
    fn test_parity_after_n_toggles() {
        for n in 0..10 {
            let mut state = CardExpansion::new();
            for _ in 0..n {
                state.toggle();
            }
            assert_eq!(state.is_expanded(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_cards_are_independent() {
        let mut first = CardExpansion::new();
        let second = CardExpansion::new();
        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
    }
}
