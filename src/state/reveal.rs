use crate::config::REVEAL_THRESHOLD;

/// What an observed element should do after an intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changes.
    Unchanged,
    /// First time in view: add `visible` and stop observing.
    Revealed { start_counter: bool },
}

/// One-way visibility of a reveal target, plus the "counted" marker for
/// stat items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    visible: bool,
    counted: bool,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Feeds one intersection report. Once visible the element never
    /// reverts, and a stat item starts its counter at most once.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, is_stat: bool) -> RevealOutcome {
        if self.visible || !intersecting || ratio < REVEAL_THRESHOLD {
            return RevealOutcome::Unchanged;
        }
        self.visible = true;
        let start_counter = is_stat && !self.counted;
        if start_counter {
            self.counted = true;
        }
        RevealOutcome::Revealed { start_counter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut state = RevealState::default();
        assert_eq!(state.observe(true, 0.05, false), RevealOutcome::Unchanged);
        assert_eq!(state.observe(false, 0.0, false), RevealOutcome::Unchanged);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut state = RevealState::default();
        assert_eq!(
            state.observe(true, 0.5, false),
            RevealOutcome::Revealed { start_counter: false }
        );
        assert_eq!(state.observe(false, 0.0, false), RevealOutcome::Unchanged);
        assert!(state.is_visible());
    }

    #[test]
    fn test_stat_counts_once() {
        let mut state = RevealState::default();
        assert_eq!(
            state.observe(true, 0.1, true),
            RevealOutcome::Revealed { start_counter: true }
        );
        assert!(state.is_counted());
        // Leaving and re-entering the viewport does not restart the counter
        state.observe(false, 0.0, true);
        assert_eq!(state.observe(true, 1.0, true), RevealOutcome::Unchanged);
    }
}
