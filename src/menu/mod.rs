//! Encoder-driven device selection menu.
//!
//! `DeviceMenu` keeps a cursor over an `ItemSource` and, on pixel displays,
//! a scroll window. It is split by concern:
//! - `navigator` - `step()`, the encoder state machine
//! - `session` - `begin()` and the per-session context
//! - `render` - row projection and the render trigger

mod cursor;
mod devices;
mod error;
mod navigator;
mod render;
mod scroll;
mod session;

pub use cursor::SelectionCursor;
pub use devices::DeviceMenu;
pub use error::NavError;
pub use navigator::StepOutcome;
pub use render::{RenderFrame, RenderSink, VisibleRows};
pub use scroll::{DEFAULT_VISIBLE_ROWS, ScrollWindow};
pub use session::{MenuContext, SelectionSlot};

use serde::{Deserialize, Serialize};

/// Kind of display the menu is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayMode {
    /// Pixel display with a fixed number of text rows. The list is clamped
    /// at both ends and scrolled through a window.
    Windowed { visible_rows: usize },
    /// Single scrolling line showing only the selected label. The list
    /// wraps around at both ends.
    ScrollingLine,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Windowed {
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }
}

impl DisplayMode {
    pub fn is_windowed(&self) -> bool {
        matches!(self, DisplayMode::Windowed { .. })
    }
}
