//! Row projection and the render trigger.

use tracing::trace;

use super::{DeviceMenu, MenuContext};
use crate::source::ItemSource;

/// Labels for the rows of a windowed display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows {
    /// Labels of the selectable items starting at the window top.
    pub labels: Vec<String>,
    /// Row holding the cursor, if it is on screen.
    pub highlighted: Option<usize>,
}

/// What the display backend is asked to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFrame {
    /// Row list for a windowed display.
    Rows(VisibleRows),
    /// Label of the selected item for a scrolling-line display.
    ScrollingText(String),
}

/// Consumer of render requests, implemented by the display backend.
pub trait RenderSink {
    fn render(&mut self, frame: RenderFrame);
}

/// Collects frames in order. Used by the simulator and tests.
impl RenderSink for Vec<RenderFrame> {
    fn render(&mut self, frame: RenderFrame) {
        self.push(frame);
    }
}

impl DeviceMenu {
    /// Builds the rows currently on screen.
    ///
    /// Walks forward from the window top, skipping non-selectable items,
    /// until the rows are filled or the list ends. Always recomputed; the
    /// registry is small. Empty on scrolling-line displays.
    pub fn visible_rows<S: ItemSource>(&self, source: &S) -> VisibleRows {
        let Some(window) = &self.window else {
            return VisibleRows::default();
        };

        let cursor = self.cursor.get();
        let upper = source.upper_bound();
        let mut rows = VisibleRows {
            labels: Vec::with_capacity(window.visible_rows()),
            highlighted: None,
        };

        let mut index = window.top().max(S::MIN_INDEX);
        while rows.labels.len() < window.visible_rows() && index < upper {
            if let Some(item) = source.item_at(index).filter(|item| source.is_selectable(item)) {
                if index == cursor {
                    rows.highlighted = Some(rows.labels.len());
                }
                rows.labels.push(source.display_label(&item));
            }
            index += 1;
        }
        rows
    }

    /// Sends the current state to the render sink.
    pub fn draw<S: ItemSource>(&self, ctx: &mut MenuContext<'_, S>) {
        let frame = if self.window.is_some() {
            RenderFrame::Rows(self.visible_rows(ctx.source))
        } else {
            let label = ctx
                .selection
                .current()
                .map(|item| ctx.source.display_label(item))
                .unwrap_or_default();
            RenderFrame::ScrollingText(label)
        };
        trace!(?frame, "render");
        ctx.sink.render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::Fixture;
    use crate::menu::{DisplayMode, SelectionSlot};
    use crate::source::mock::MockRegistry;

    fn windowed_at(top: i32, cursor: i32, rows: usize) -> DeviceMenu {
        let mut menu = DeviceMenu::new(DisplayMode::Windowed { visible_rows: rows });
        menu.cursor.set(cursor);
        if let Some(window) = menu.window.as_mut() {
            window.reset_to(top);
        }
        menu
    }

    #[test]
    fn test_rows_stop_at_end_of_list() {
        // dynamic[1] is non-selectable and last
        let source = Fixture::new(&[true, false]);
        let menu = windowed_at(0, 0, 2);

        let rows = menu.visible_rows(&source);
        assert_eq!(rows.labels, vec!["dynamic[0]".to_string()]);
        assert_eq!(rows.highlighted, Some(0));
    }

    #[test]
    fn test_rows_skip_disconnected_devices() {
        let registry = MockRegistry::studio_rig();
        let menu = windowed_at(-1, 2, 3);

        let rows = menu.visible_rows(&registry);
        assert_eq!(rows.labels, vec!["Loopback", "Keystep 37", "Launchpad X"]);
        assert_eq!(rows.highlighted, Some(2));
    }

    #[test]
    fn test_rows_without_cursor_on_screen() {
        let registry = MockRegistry::studio_rig();
        let menu = windowed_at(-4, 3, 2);

        let rows = menu.visible_rows(&registry);
        assert_eq!(rows.labels, vec!["DIN", "Computer 1"]);
        assert_eq!(rows.highlighted, None);
    }

    #[test]
    fn test_rows_empty_on_scrolling_line() {
        let registry = MockRegistry::studio_rig();
        let menu = DeviceMenu::new(DisplayMode::ScrollingLine);
        assert_eq!(menu.visible_rows(&registry), VisibleRows::default());
    }

    #[test]
    fn test_draw_windowed_sends_rows() {
        let registry = MockRegistry::ports_only();
        let mut selection = SelectionSlot::new();
        let mut frames: Vec<RenderFrame> = Vec::new();
        let mut ctx = MenuContext::new(&registry, &mut selection, &mut frames);

        let menu = windowed_at(-4, -4, 3);
        menu.draw(&mut ctx);

        assert_eq!(
            frames,
            vec![RenderFrame::Rows(VisibleRows {
                labels: vec!["DIN".to_string(), "Loopback".to_string()],
                highlighted: Some(0),
            })]
        );
    }
}
