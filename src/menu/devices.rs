//! Device menu state and event handling.

use tracing::{debug, warn};

use super::{DisplayMode, MenuContext, ScrollWindow, SelectionCursor};
use crate::input::{ActionResult, Button, EncoderName, Event, handle_generic};
use crate::source::{ItemIndex, ItemSource};

/// Selection state of the MIDI device list for one menu session.
///
/// `window` is present exactly when the menu is drawn on a windowed display,
/// so the wrap/clamp policy and scroll maintenance both key off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceMenu {
    pub(super) cursor: SelectionCursor,
    pub(super) window: Option<ScrollWindow>,
}

impl DeviceMenu {
    /// Creates the menu for the given display. Call `begin` before use.
    pub fn new(display: DisplayMode) -> Self {
        let window = match display {
            DisplayMode::Windowed { visible_rows } => Some(ScrollWindow::new(visible_rows)),
            DisplayMode::ScrollingLine => None,
        };
        Self {
            cursor: SelectionCursor::new(0),
            window,
        }
    }

    pub fn display(&self) -> DisplayMode {
        match &self.window {
            Some(window) => DisplayMode::Windowed {
                visible_rows: window.visible_rows(),
            },
            None => DisplayMode::ScrollingLine,
        }
    }

    /// Index of the selected item.
    pub fn cursor(&self) -> ItemIndex {
        self.cursor.get()
    }

    /// Scroll window, on windowed displays only.
    pub fn window(&self) -> Option<&ScrollWindow> {
        self.window.as_ref()
    }

    /// Handles one input event.
    ///
    /// Select-encoder turns move the selection and a select-encoder press
    /// asks the caller to open the selected device's submenu. Everything
    /// else falls through to the shared handler.
    pub fn handle_event<S: ItemSource>(
        &mut self,
        ctx: &mut MenuContext<'_, S>,
        event: Event,
    ) -> ActionResult {
        match event {
            Event::Encoder {
                name: EncoderName::Select,
                offset,
            } => {
                if let Err(e) = self.step(ctx, offset) {
                    warn!(error = %e, offset, "encoder step failed");
                }
                ActionResult::DealtWith
            }
            Event::Button {
                which: Button::SelectEncoder,
                pressed: true,
            } => {
                debug!(cursor = self.cursor(), "opening device submenu");
                ActionResult::EnterSubmenu
            }
            other => handle_generic(other),
        }
    }
}
