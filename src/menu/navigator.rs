//! Encoder-driven selection stepping.
//!
//! One encoder detent moves the cursor to the next selectable item in the
//! turn direction. Windowed displays stop at both ends of the list;
//! scrolling-line displays wrap around. The skip-scan never runs more than
//! one full loop over the index space.

use tracing::{debug, warn};

use super::{DeviceMenu, MenuContext, NavError};
use crate::source::{ItemIndex, ItemSource};

/// Result of a successful `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor now rests on `to`. `from` is the index held before the
    /// step, which may lie past the end after an unplug.
    Moved { from: ItemIndex, to: ItemIndex },
    /// A windowed list was already at its end. Nothing changed.
    Blocked,
}

impl DeviceMenu {
    /// Moves the selection by one encoder detent.
    ///
    /// `offset` is reduced to its sign; fast turns still move one item.
    /// Bounds are read from the source on every call, and a cursor left
    /// beyond the end by an unplugged device is pulled back first. A cursor
    /// resting on a non-selectable item is never left there: if the turn
    /// direction is blocked the scan turns around.
    ///
    /// On success the new item is published to the selection slot, the
    /// scroll window is adjusted and a render is triggered.
    pub fn step<S: ItemSource>(
        &mut self,
        ctx: &mut MenuContext<'_, S>,
        offset: i32,
    ) -> Result<StepOutcome, NavError> {
        let offset = offset.clamp(-1, 1);
        let source = ctx.source;
        let min = S::MIN_INDEX;
        let upper = source.upper_bound();
        if upper <= min {
            return Err(NavError::EmptyDomain);
        }

        let previous = self.cursor.get();
        let start = previous.clamp(min, upper - 1);
        if start != previous {
            warn!(previous, clamped = start, upper, "cursor outside item range");
            self.cursor.set(start);
            if let Some(window) = self.window.as_mut() {
                window.reveal(start);
            }
        }

        let wraps = self.window.is_none();
        let mut found = next_selectable(source, start, offset, wraps)?;
        if found.is_none() && !source.is_selectable_at(start) {
            // Stale cursor at a clamped end: turn around rather than stay on it
            let fallback = if offset < 0 { 1 } else { -1 };
            found = next_selectable(source, start, fallback, wraps)?;
        }

        let target = match found {
            Some(target) => target,
            // Clamped onto a live item; the clamp itself is the move
            None if start != previous && source.is_selectable_at(start) => start,
            None => {
                if !source.is_selectable_at(start) && !any_selectable(source) {
                    return Err(NavError::NoSelectableItems { min, upper });
                }
                debug!(cursor = start, offset, "step blocked at end of list");
                return Ok(StepOutcome::Blocked);
            }
        };

        self.cursor.set(target);
        if let Some(item) = source.item_at(target) {
            ctx.selection.publish(item);
        }

        if let Some(window) = self.window.as_mut() {
            window.reveal(target);
            if offset >= 0 {
                window.settle_forward(target, source);
            }
        }

        debug!(from = previous, to = target, offset, "selection moved");
        self.draw(ctx);
        Ok(StepOutcome::Moved {
            from: previous,
            to: target,
        })
    }
}

/// Finds the next selectable index after `start` in the direction of
/// `offset`.
///
/// A zero offset checks `start` itself first and then scans forward.
/// Returns `Ok(None)` when a non-wrapping scan runs off either end, and
/// `NoSelectableItems` once every index has been visited.
fn next_selectable<S: ItemSource>(
    source: &S,
    start: ItemIndex,
    offset: i32,
    wraps: bool,
) -> Result<Option<ItemIndex>, NavError> {
    let min = S::MIN_INDEX;
    let upper = source.upper_bound();
    let span = usize::try_from(upper - min).unwrap_or(0);
    let direction = if offset == 0 { 1 } else { offset };

    let mut candidate = start;
    let mut delta = offset;
    for _ in 0..span {
        candidate += delta;
        delta = direction;

        if candidate >= upper {
            if !wraps {
                return Ok(None);
            }
            candidate = min;
        } else if candidate < min {
            if !wraps {
                return Ok(None);
            }
            candidate = upper - 1;
        }

        if source.is_selectable_at(candidate) {
            return Ok(Some(candidate));
        }
    }

    Err(NavError::NoSelectableItems { min, upper })
}

fn any_selectable<S: ItemSource>(source: &S) -> bool {
    (S::MIN_INDEX..source.upper_bound()).any(|index| source.is_selectable_at(index))
}
