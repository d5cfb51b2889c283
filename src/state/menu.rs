/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Class shared by the hamburger button and the nav panel.
    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    /// Value for `document.body.style.overflow`; an open menu locks page scroll.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locks_body_scroll() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.active_class(), Some("active"));
        assert_eq!(menu.body_overflow(), "hidden");

        let menu = menu.toggled();
        assert_eq!(menu.active_class(), None);
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_close_is_idempotent() {
        let menu = MenuState::default().toggled().closed();
        assert!(!menu.is_open());
        assert_eq!(menu.closed(), menu);
    }
}
