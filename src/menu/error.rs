//! Navigation errors.

use crate::source::ItemIndex;

/// Errors that can occur while moving the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A full loop over `[min, upper)` found nothing to stop on.
    NoSelectableItems { min: ItemIndex, upper: ItemIndex },
    /// The source reported no items at all.
    EmptyDomain,
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavError::NoSelectableItems { min, upper } => {
                write!(f, "No selectable items in [{}, {})", min, upper)
            }
            NavError::EmptyDomain => write!(f, "Item source is empty"),
        }
    }
}

impl std::error::Error for NavError {}
