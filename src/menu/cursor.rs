//! Selected-item cursor.

use crate::source::ItemIndex;

/// Index of the currently selected item.
///
/// The cursor does no validation of its own: only `step` and `begin` write
/// to it, and both hand it indices they already resolved against the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    index: ItemIndex,
}

impl SelectionCursor {
    pub fn new(index: ItemIndex) -> Self {
        Self { index }
    }

    pub fn get(&self) -> ItemIndex {
        self.index
    }

    pub fn set(&mut self, index: ItemIndex) {
        self.index = index;
    }
}
