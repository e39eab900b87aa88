//! Bubble wrap grid
//!
//! Each bubble pops exactly once. The popped counter is kept alongside the
//! states so reads are O(1) and it can never drift from them: it only moves
//! on an intact -> popped transition and is zeroed by `reset`.

use crate::domain::{BubbleState, Readout};

pub struct BubbleGrid {
    cols: u32,
    rows: u32,
    states: Vec<BubbleState>,
    popped: usize,
}

impl BubbleGrid {
    /// Grid laid out as `cols` x `rows`, all intact
    pub fn new(cols: u32, rows: u32) -> Self {
        let mut grid = Self { cols: 0, rows: 0, states: Vec::new(), popped: 0 };
        grid.reset_with_layout(cols, rows);
        grid
    }

    /// `n` intact bubbles, counter cleared.
    ///
    /// Keeps the column count when `n` fills whole rows, otherwise lays the
    /// bubbles out as a single row.
    pub fn reset(&mut self, n: usize) {
        let cols = if self.cols > 0 && n % self.cols as usize == 0 {
            self.cols
        } else {
            n as u32
        };
        self.states.clear();
        self.states.resize(n, BubbleState::Intact);
        self.cols = cols;
        self.rows = if cols == 0 { 0 } else { (n / cols as usize) as u32 };
        self.popped = 0;
    }

    pub fn reset_with_layout(&mut self, cols: u32, rows: u32) {
        self.cols = cols;
        self.reset(cols as usize * rows as usize);
    }

    /// Pop the bubble at `index`.
    ///
    /// Returns true only on an actual intact -> popped transition; already
    /// popped or out-of-range indices are no-ops.
    pub fn pop(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if *state == BubbleState::Intact => {
                *state = BubbleState::Popped;
                self.popped += 1;
                true
            }
            _ => false,
        }
    }

    /// Pop every intact bubble; returns how many changed
    pub fn pop_all(&mut self) -> usize {
        let changed = self.states.len() - self.popped;
        self.states.fill(BubbleState::Popped);
        self.popped = self.states.len();
        changed
    }

    pub fn popped_count(&self) -> usize {
        self.popped
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn state(&self, index: usize) -> Option<BubbleState> {
        self.states.get(index).copied()
    }

    /// Out-of-range indices read as not popped
    pub fn is_popped(&self, index: usize) -> bool {
        self.state(index).is_some_and(BubbleState::is_popped)
    }

    pub fn states(&self) -> &[BubbleState] {
        &self.states
    }

    /// Every bubble popped (vacuously true for an empty grid)
    pub fn is_cleared(&self) -> bool {
        self.popped == self.states.len()
    }

    pub fn readout(&self) -> Readout {
        Readout { popped: self.popped, total: self.states.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_intact() {
        let grid = BubbleGrid::new(10, 12);
        assert_eq!(grid.len(), 120);
        assert_eq!((grid.cols(), grid.rows()), (10, 12));
        assert_eq!(grid.popped_count(), 0);
        assert!(grid.states().iter().all(|s| *s == BubbleState::Intact));
    }

    #[test]
    fn double_pop_counts_once() {
        let mut grid = BubbleGrid::new(10, 12);
        assert!(grid.pop(0));
        assert!(!grid.pop(0));
        assert_eq!(grid.popped_count(), 1);
        assert!(grid.is_popped(0));

        grid.reset(120);
        assert_eq!(grid.popped_count(), 0);
        assert!(!grid.is_popped(0));
    }

    #[test]
    fn pop_is_idempotent() {
        let mut once = BubbleGrid::new(4, 4);
        let mut twice = BubbleGrid::new(4, 4);
        once.pop(5);
        twice.pop(5);
        twice.pop(5);
        assert_eq!(once.states(), twice.states());
        assert_eq!(once.popped_count(), twice.popped_count());
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut grid = BubbleGrid::new(3, 3);
        assert!(!grid.pop(9));
        assert!(!grid.pop(usize::MAX));
        assert_eq!(grid.popped_count(), 0);
        assert_eq!(grid.state(9), None);
        assert!(!grid.is_popped(9));
    }

    #[test]
    fn pop_all_pops_everything() {
        for n in [0usize, 1, 7, 120] {
            let mut grid = BubbleGrid::new(1, 1);
            grid.reset(n);
            grid.pop(0);
            let changed = grid.pop_all();
            assert_eq!(changed, n.saturating_sub(1));
            assert_eq!(grid.popped_count(), n);
            assert!(grid.states().iter().all(|s| s.is_popped()));
            assert!(grid.is_cleared());
        }
    }

    #[test]
    fn count_is_monotonic_and_bounded() {
        let mut grid = BubbleGrid::new(5, 4);
        let n = grid.len();
        let mut last = 0;
        // Deterministic walk with repeats and out-of-range indices
        for i in 0..200usize {
            grid.pop((i * 7) % (n + 3));
            let now = grid.popped_count();
            assert!(now >= last);
            assert!(now <= n);
            last = now;
        }
    }

    #[test]
    fn reset_keeps_layout_when_it_fits() {
        let mut grid = BubbleGrid::new(10, 12);
        grid.pop_all();
        grid.reset(120);
        assert_eq!((grid.cols(), grid.rows()), (10, 12));

        grid.reset(30);
        assert_eq!((grid.cols(), grid.rows()), (10, 3));

        grid.reset(7);
        assert_eq!((grid.cols(), grid.rows()), (7, 1));
    }

    #[test]
    fn readout_tracks_pops() {
        let mut grid = BubbleGrid::new(10, 12);
        grid.pop(3);
        grid.pop(4);
        assert_eq!(grid.readout(), Readout { popped: 2, total: 120 });
        assert_eq!(grid.readout().to_string(), "2 / 120");
    }
}
