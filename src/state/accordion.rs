/// Disclosure list where at most one item is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All items start closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Activating the open item closes it; activating any other item
    /// closes the rest and opens it. Indices past the end are ignored.
    pub fn activate(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// Adopts a new item count, closing the open item if it no longer exists.
    pub fn resized(mut self, len: usize) -> Self {
        self.len = len;
        if self.open.is_some_and(|open| open >= len) {
            self.open = None;
        }
        self
    }

    /// Consuming variant for use with `UseStateHandle::set`.
    pub fn activated(mut self, index: usize) -> Self {
        self.activate(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(acc: &Accordion) -> usize {
        (0..acc.len()).filter(|&i| acc.is_open(i)).count()
    }

    #[test]
    fn test_starts_closed() {
        let acc = Accordion::new(4);
        assert_eq!(acc.open_index(), None);
        assert_eq!(open_count(&acc), 0);
    }

    #[test]
    fn test_activate_opens_and_switches() {
        let mut acc = Accordion::new(3);
        acc.activate(1);
        assert!(acc.is_open(1));

        acc.activate(2);
        assert!(!acc.is_open(1));
        assert!(acc.is_open(2));
    }

    #[test]
    fn test_reactivate_closes_everything() {
        let mut acc = Accordion::new(3);
        acc.activate(0);
        acc.activate(0);
        assert_eq!(acc.open_index(), None);
        assert_eq!(open_count(&acc), 0);
    }

    #[test]
    fn test_at_most_one_open_for_any_sequence() {
        let sequence = [0, 3, 3, 1, 4, 2, 2, 0, 1, 1, 4, 4, 3, 0, 9];
        let mut acc = Accordion::new(5);
        for index in sequence {
            acc.activate(index);
            assert!(open_count(&acc) <= 1, "after activating {}", index);
        }
    }

    #[test]
    fn test_resized_list_accepts_new_items() {
        let acc = Accordion::new(2).activated(1).resized(4).activated(3);
        assert_eq!(acc.open_index(), Some(3));
        assert_eq!(acc.len(), 4);
    }

    #[test]
    fn test_shrinking_closes_removed_item() {
        let acc = Accordion::new(4).activated(3).resized(2);
        assert_eq!(acc.open_index(), None);

        let acc = Accordion::new(4).activated(1).resized(2);
        assert_eq!(acc.open_index(), Some(1));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let acc = Accordion::new(2).activated(1).activated(7);
        assert_eq!(acc.open_index(), Some(1));
    }
}
