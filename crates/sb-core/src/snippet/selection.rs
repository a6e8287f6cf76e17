/// Index of the highlighted row, kept inside `[0, len - 1]`.
///
/// An empty list pins the index at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        self.index = (self.index + 1).min(len.saturating_sub(1));
    }

    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_stops_at_zero() {
        let mut sel = Selection::default();
        sel.up();
        sel.up();
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn down_stops_at_last_row() {
        let mut sel = Selection::default();
        for _ in 0..10 {
            sel.down(3);
        }
        assert_eq!(sel.index(), 2);
    }

    #[test]
    fn empty_list_pins_index_at_zero() {
        let mut sel = Selection::default();
        sel.down(0);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut sel = Selection::default();
        sel.down(5);
        sel.down(5);
        sel.down(5);
        sel.clamp(2);
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn any_navigation_sequence_stays_in_bounds() {
        let lens = [0usize, 1, 2, 7];
        for &len in &lens {
            let mut sel = Selection::default();
            for step in 0..40 {
                if step % 3 == 0 {
                    sel.up();
                } else {
                    sel.down(len);
                }
                assert!(sel.index() <= len.saturating_sub(1));
            }
        }
    }
}
