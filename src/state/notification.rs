/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "linear-gradient(135deg, #10b981, #059669)",
            NotificationKind::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            NotificationKind::Info => "linear-gradient(135deg, #3b82f6, #2563eb)",
        }
    }
}

pub type ToastId = u64;

/// Where a toast is in its lifetime. Both the auto-dismiss timer and the
/// close button move `Visible` to `Dismissing`; only the end of the exit
/// transition moves `Dismissing` to `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Dismissing,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

/// Holds the single toast on screen. A new toast replaces the old one
/// outright; timers still pending for the old one become no-ops because
/// every transition is keyed by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationCenter {
    current: Option<Toast>,
    next_id: ToastId,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
        });
        id
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Number of toasts in the display tree, zero or one.
    pub fn displayed(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Phase of any toast ever issued. Replaced and removed toasts both
    /// report `Removed`.
    pub fn phase_of(&self, id: ToastId) -> ToastPhase {
        match &self.current {
            Some(toast) if toast.id == id => toast.phase,
            _ => ToastPhase::Removed,
        }
    }

    /// Starts the exit transition. Returns false when the toast is already
    /// leaving or gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Dismissing;
                true
            }
            _ => false,
        }
    }

    /// Takes a dismissing toast out of the display tree.
    pub fn remove(&mut self, id: ToastId) -> bool {
        match &self.current {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Dismissing => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_shows_visible_toast() {
        let mut center = NotificationCenter::new();
        let id = center.notify("hello", NotificationKind::Info);

        let toast = center.current().unwrap();
        assert_eq!(toast.id, id);
        assert_eq!(toast.message, "hello");
        assert_eq!(toast.phase, ToastPhase::Visible);
        assert_eq!(center.displayed(), 1);
    }

    #[test]
    fn test_second_notify_replaces_first() {
        let mut center = NotificationCenter::new();
        let first = center.notify("one", NotificationKind::Error);
        let second = center.notify("two", NotificationKind::Success);

        assert_eq!(center.displayed(), 1);
        assert_eq!(center.current().unwrap().message, "two");
        assert_eq!(center.phase_of(first), ToastPhase::Removed);
        assert_eq!(center.phase_of(second), ToastPhase::Visible);
    }

    #[test]
    fn test_click_dismiss_then_remove() {
        let mut center = NotificationCenter::new();
        let id = center.notify("bye", NotificationKind::Info);

        assert!(center.dismiss(id));
        assert_eq!(center.phase_of(id), ToastPhase::Dismissing);
        // Still rendered while the exit animation plays
        assert_eq!(center.displayed(), 1);

        assert!(center.remove(id));
        assert_eq!(center.displayed(), 0);
        assert_eq!(center.phase_of(id), ToastPhase::Removed);
    }

    #[test]
    fn test_timeout_after_click_is_noop() {
        let mut center = NotificationCenter::new();
        let id = center.notify("bye", NotificationKind::Info);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.remove(id));
        assert!(!center.dismiss(id));
        assert!(!center.remove(id));
        assert_eq!(center.displayed(), 0);
    }

    #[test]
    fn test_stale_timer_does_not_touch_replacement() {
        let mut center = NotificationCenter::new();
        let old = center.notify("old", NotificationKind::Info);
        let new = center.notify("new", NotificationKind::Info);

        assert!(!center.dismiss(old));
        assert!(!center.remove(old));
        assert_eq!(center.phase_of(new), ToastPhase::Visible);
    }

    #[test]
    fn test_remove_requires_dismissing() {
        let mut center = NotificationCenter::new();
        let id = center.notify("stay", NotificationKind::Info);
        assert!(!center.remove(id));
        assert_eq!(center.displayed(), 1);
    }

    #[test]
    fn test_kind_class_names() {
        assert_eq!(NotificationKind::default().as_str(), "info");
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }
}
