//! Item source abstraction for menu navigation.
//!
//! This module defines the `ItemSource` trait that lets the menu engine walk
//! an indexable list of items (MIDI ports and hosted devices) without owning
//! the registry that backs it.

pub mod mock;

use std::fmt::Debug;

/// Signed position in a source's index space.
///
/// Negative values address the fixed special items, non-negative values
/// address dynamically registered items.
pub type ItemIndex = i32;

/// Read-only view of an indexable item list.
///
/// The index space is `[MIN_INDEX, upper_bound())`. Items below zero are
/// fixed pseudo-items that are always present; items from zero upwards are
/// registered at runtime and may come and go between calls.
///
/// Implementations are queried fresh on every navigation step, so `count()`
/// is allowed to change between steps (device hot-plug).
pub trait ItemSource {
    /// Cheap, comparable reference to an item.
    type Handle: Clone + PartialEq + Debug;

    /// Lowest special index. Always present in the index space.
    const MIN_INDEX: ItemIndex;

    /// Total number of items, special items included.
    fn count(&self) -> usize;

    /// Returns the item at `index`, or `None` outside the index space.
    fn item_at(&self, index: ItemIndex) -> Option<Self::Handle>;

    /// Returns `true` if the item may be used as a stopping point.
    fn is_selectable(&self, item: &Self::Handle) -> bool;

    /// Returns the text shown for the item.
    fn display_label(&self, item: &Self::Handle) -> String;

    /// Exclusive upper bound of the index space.
    fn upper_bound(&self) -> ItemIndex {
        let count = ItemIndex::try_from(self.count()).unwrap_or(ItemIndex::MAX);
        Self::MIN_INDEX.saturating_add(count)
    }

    /// Returns `true` if `index` holds a selectable item.
    fn is_selectable_at(&self, index: ItemIndex) -> bool {
        self.item_at(index)
            .is_some_and(|item| self.is_selectable(&item))
    }

    /// Returns the position of `item` in the current index space.
    fn position_of(&self, item: &Self::Handle) -> Option<ItemIndex> {
        (Self::MIN_INDEX..self.upper_bound())
            .find(|&index| self.item_at(index).as_ref() == Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three always-selectable specials and a configurable dynamic tail.
    struct Letters {
        dynamic: Vec<bool>,
    }

    impl ItemSource for Letters {
        type Handle = ItemIndex;
        const MIN_INDEX: ItemIndex = -3;

        fn count(&self) -> usize {
            3 + self.dynamic.len()
        }

        fn item_at(&self, index: ItemIndex) -> Option<ItemIndex> {
            (index >= Self::MIN_INDEX && index < self.upper_bound()).then_some(index)
        }

        fn is_selectable(&self, item: &ItemIndex) -> bool {
            *item < 0 || self.dynamic[*item as usize]
        }

        fn display_label(&self, item: &ItemIndex) -> String {
            format!("item {}", item)
        }
    }

    #[test]
    fn test_upper_bound_counts_specials() {
        let source = Letters {
            dynamic: vec![true, false],
        };
        assert_eq!(source.upper_bound(), 2);

        let empty = Letters { dynamic: vec![] };
        assert_eq!(empty.upper_bound(), 0);
    }

    #[test]
    fn test_is_selectable_at() {
        let source = Letters {
            dynamic: vec![true, false],
        };
        assert!(source.is_selectable_at(-3));
        assert!(source.is_selectable_at(0));
        assert!(!source.is_selectable_at(1));
        // Outside the index space
        assert!(!source.is_selectable_at(2));
        assert!(!source.is_selectable_at(-4));
    }

    #[test]
    fn test_position_of() {
        let source = Letters {
            dynamic: vec![true, true, true],
        };
        assert_eq!(source.position_of(&-3), Some(-3));
        assert_eq!(source.position_of(&2), Some(2));
        assert_eq!(source.position_of(&7), None);
    }
}
