//! Menu session entry and the context threaded through every call.

use std::fmt;

use tracing::debug;

use super::{DeviceMenu, NavError, RenderSink};
use crate::source::ItemSource;

/// Caller-owned memory of the selected item.
///
/// Outlives individual menu sessions so that returning from a submenu can
/// restore the previous selection. Every change is forwarded to the optional
/// listener before it is stored.
pub struct SelectionSlot<H> {
    current: Option<H>,
    listener: Option<Box<dyn FnMut(&H)>>,
}

impl<H> Default for SelectionSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            listener: None,
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for SelectionSlot<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSlot")
            .field("current", &self.current)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl<H> SelectionSlot<H> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already remembers `item`.
    pub fn remembering(item: H) -> Self {
        Self {
            current: Some(item),
            listener: None,
        }
    }

    /// Registers a callback invoked with every newly published item.
    pub fn with_listener(mut self, listener: impl FnMut(&H) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    /// Records `item` as the current selection and notifies the listener.
    pub fn publish(&mut self, item: H) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&item);
        }
        self.current = Some(item);
    }
}

/// Everything a menu call needs from its surroundings.
///
/// Built by the caller for each event and passed down by reference, so the
/// menu never reaches for global state.
pub struct MenuContext<'a, S: ItemSource> {
    pub source: &'a S,
    pub selection: &'a mut SelectionSlot<S::Handle>,
    pub sink: &'a mut dyn RenderSink,
}

impl<'a, S: ItemSource> MenuContext<'a, S> {
    pub fn new(
        source: &'a S,
        selection: &'a mut SelectionSlot<S::Handle>,
        sink: &'a mut dyn RenderSink,
    ) -> Self {
        Self {
            source,
            selection,
            sink,
        }
    }
}

impl DeviceMenu {
    /// Starts a menu session.
    ///
    /// When `navigated_back` is set (the user is returning from a submenu)
    /// the remembered selection is restored if it is still present and
    /// selectable. Otherwise the session starts on the lowest special item,
    /// which is always there.
    pub fn begin<S: ItemSource>(
        &mut self,
        ctx: &mut MenuContext<'_, S>,
        navigated_back: bool,
    ) -> Result<(), NavError> {
        let source = ctx.source;
        if source.upper_bound() <= S::MIN_INDEX {
            return Err(NavError::EmptyDomain);
        }

        let resumed = if navigated_back {
            ctx.selection
                .current()
                .filter(|item| source.is_selectable(item))
                .and_then(|item| source.position_of(item))
        } else {
            None
        };

        let index = match resumed {
            Some(index) => {
                debug!(index, "resuming at remembered item");
                index
            }
            None => S::MIN_INDEX,
        };
        self.cursor.set(index);

        if let Some(item) = source.item_at(index) {
            ctx.selection.publish(item);
        }

        match self.window.as_mut() {
            Some(window) => window.reset_to(index),
            None => self.draw(ctx),
        }
        Ok(())
    }
}
