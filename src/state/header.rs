use crate::config::{HEADER_SCROLL_THRESHOLD, PARALLAX_FACTOR};

/// Header appearance derived from the current scroll offset alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    scrolled: bool,
}

impl HeaderState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > HEADER_SCROLL_THRESHOLD,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn class(&self) -> Option<&'static str> {
        self.scrolled.then_some("scrolled")
    }
}

/// Hero `background-position-y` in px for a given scroll offset.
pub fn parallax_offset(offset: f64) -> f64 {
    offset.max(0.0) * PARALLAX_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!HeaderState::from_offset(0.0).is_scrolled());
        assert!(!HeaderState::from_offset(49.0).is_scrolled());
        assert!(!HeaderState::from_offset(50.0).is_scrolled());
        assert!(HeaderState::from_offset(51.0).is_scrolled());
    }

    #[test]
    fn test_no_hysteresis() {
        let offsets = [51.0, 51.0, 10.0, 51.0, 49.0, 49.0];
        let states: Vec<bool> = offsets
            .iter()
            .map(|&o| HeaderState::from_offset(o).is_scrolled())
            .collect();
        assert_eq!(states, vec![true, true, false, true, false, false]);
        assert_eq!(HeaderState::from_offset(51.0).class(), Some("scrolled"));
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(200.0), 100.0);
        assert_eq!(parallax_offset(-30.0), 0.0);
    }
}
