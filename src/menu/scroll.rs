//! Scroll window for displays with a fixed number of visible rows.
//!
//! The window only tracks `top`, the first index that may be drawn. Rows are
//! filled by walking forward from `top` and skipping non-selectable items, so
//! keeping the cursor visible means bounding the number of selectable items
//! between `top` and the cursor, not their index distance.

use crate::source::{ItemIndex, ItemSource};

/// Default row count of the menu area on the pixel display.
pub const DEFAULT_VISIBLE_ROWS: usize = 3;

/// Topmost visible index of a windowed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    top: ItemIndex,
    visible_rows: usize,
}

impl ScrollWindow {
    /// Creates a window showing `visible_rows` rows (at least one).
    pub fn new(visible_rows: usize) -> Self {
        Self {
            top: 0,
            visible_rows: visible_rows.max(1),
        }
    }

    pub fn top(&self) -> ItemIndex {
        self.top
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Puts `index` on the first row.
    pub fn reset_to(&mut self, index: ItemIndex) {
        self.top = index;
    }

    /// Scrolls up if `cursor` is above the window.
    pub fn reveal(&mut self, cursor: ItemIndex) {
        if cursor < self.top {
            self.top = cursor;
        }
    }

    /// Scrolls down after a forward move so that `cursor` sits no lower than
    /// the last visible row.
    ///
    /// Walks backward from the cursor counting selectable items. If `top` is
    /// reached first the window already fits; otherwise `top` moves to the
    /// item that fills the first row.
    pub fn settle_forward<S: ItemSource>(&mut self, cursor: ItemIndex, source: &S) {
        let mut seen = 1;
        let mut index = cursor;
        while seen < self.visible_rows {
            index -= 1;
            if index <= self.top {
                return;
            }
            if source.is_selectable_at(index) {
                seen += 1;
            }
        }
        self.top = index;
    }

    /// Number of selectable items in `[top, cursor]`.
    pub fn rows_through<S: ItemSource>(&self, cursor: ItemIndex, source: &S) -> usize {
        (self.top..=cursor)
            .filter(|&index| source.is_selectable_at(index))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::MockRegistry;

    #[test]
    fn test_new_has_at_least_one_row() {
        assert_eq!(ScrollWindow::new(0).visible_rows(), 1);
        assert_eq!(ScrollWindow::new(4).visible_rows(), 4);
    }

    #[test]
    fn test_reveal_only_scrolls_up() {
        let mut window = ScrollWindow::new(3);
        window.reset_to(2);
        window.reveal(5);
        assert_eq!(window.top(), 2);
        window.reveal(-1);
        assert_eq!(window.top(), -1);
    }

    #[test]
    fn test_settle_forward_keeps_window_when_cursor_fits() {
        let registry = MockRegistry::studio_rig();
        let mut window = ScrollWindow::new(3);
        window.reset_to(-4);
        // -4, -3, -2 are all selectable: exactly three rows
        window.settle_forward(-2, &registry);
        assert_eq!(window.top(), -4);
    }

    #[test]
    fn test_settle_forward_scrolls_by_selectable_rows() {
        let registry = MockRegistry::studio_rig();
        let mut window = ScrollWindow::new(3);
        window.reset_to(-4);

        window.settle_forward(-1, &registry);
        assert_eq!(window.top(), -3);

        // Index 1 (Digitakt) is disconnected and does not take a row
        window.settle_forward(2, &registry);
        assert_eq!(window.top(), -1);
        assert_eq!(window.rows_through(2, &registry), 3);
    }

    #[test]
    fn test_settle_forward_single_row() {
        let registry = MockRegistry::studio_rig();
        let mut window = ScrollWindow::new(1);
        window.reset_to(-4);
        window.settle_forward(0, &registry);
        assert_eq!(window.top(), 0);
        assert_eq!(window.rows_through(0, &registry), 1);
    }

    #[test]
    fn test_settle_forward_at_top_is_noop() {
        let registry = MockRegistry::studio_rig();
        let mut window = ScrollWindow::new(3);
        window.reset_to(0);
        window.settle_forward(0, &registry);
        assert_eq!(window.top(), 0);
    }
}
