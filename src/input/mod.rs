//! Hardware input events and the shared fallback handler.
//!
//! Events arrive already decoded and debounced. Each menu matches the
//! variants it cares about and forwards the rest to `handle_generic`.

mod script;

pub use script::{ScriptParseError, parse_script};

/// Rotary encoders on the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderName {
    /// Menu select encoder (the one with a push switch).
    Select,
    Horizontal,
    Vertical,
}

/// Buttons on the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Push switch of the select encoder.
    SelectEncoder,
    Back,
    Shift,
}

/// Decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Encoder turned by `offset` detents (negative is counter-clockwise).
    Encoder { name: EncoderName, offset: i32 },
    /// Button pressed (`pressed == true`) or released.
    Button { which: Button, pressed: bool },
}

impl Event {
    pub fn encoder(name: EncoderName, offset: i32) -> Self {
        Event::Encoder { name, offset }
    }

    pub fn press(which: Button) -> Self {
        Event::Button {
            which,
            pressed: true,
        }
    }

    pub fn release(which: Button) -> Self {
        Event::Button {
            which,
            pressed: false,
        }
    }
}

/// Outcome of handling an event, read by the menu framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Consumed by the menu.
    DealtWith,
    /// Not handled; the caller may offer it elsewhere.
    NotDealtWith,
    /// Open the submenu for the current selection.
    EnterSubmenu,
    /// Leave this menu and return to its parent.
    GoUp,
}

/// Default handling shared by every menu.
pub fn handle_generic(event: Event) -> ActionResult {
    match event {
        Event::Button {
            which: Button::Back,
            pressed: true,
        } => ActionResult::GoUp,
        _ => ActionResult::NotDealtWith,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_press_goes_up() {
        assert_eq!(handle_generic(Event::press(Button::Back)), ActionResult::GoUp);
        assert_eq!(
            handle_generic(Event::release(Button::Back)),
            ActionResult::NotDealtWith
        );
    }

    #[test]
    fn test_everything_else_is_not_handled() {
        assert_eq!(
            handle_generic(Event::encoder(EncoderName::Select, 1)),
            ActionResult::NotDealtWith
        );
        assert_eq!(
            handle_generic(Event::press(Button::Shift)),
            ActionResult::NotDealtWith
        );
    }
}
