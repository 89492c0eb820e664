//! Textual event scripts.
//!
//! A script is a list of tokens separated by whitespace or commas:
//! - `+1`, `-1`, `3`, `0` - select encoder turn by that many detents
//! - `select` / `press` - select encoder pressed
//! - `release` - select encoder released
//! - `back` - back button pressed
//! - `shift` - shift button pressed

use super::{Button, EncoderName, Event};

/// Error type for script parsing failures.
#[derive(Debug, Clone)]
pub struct ScriptParseError {
    pub token: String,
    pub position: usize,
}

impl std::fmt::Display for ScriptParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unrecognized event '{}' at position {}. Use: +N/-N (turn), \
             select, release, back, shift",
            self.token, self.position
        )
    }
}

impl std::error::Error for ScriptParseError {}

/// Parses an event script into events.
///
/// # Examples
///
/// ```
/// use midimenu::input::{Button, EncoderName, Event, parse_script};
///
/// let events = parse_script("+1, +1 -1 select").unwrap();
/// assert_eq!(events[0], Event::encoder(EncoderName::Select, 1));
/// assert_eq!(events[3], Event::press(Button::SelectEncoder));
/// ```
pub fn parse_script(input: &str) -> Result<Vec<Event>, ScriptParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            parse_token(token).ok_or_else(|| ScriptParseError {
                token: token.to_string(),
                position: position + 1,
            })
        })
        .collect()
}

fn parse_token(token: &str) -> Option<Event> {
    let event = match token.to_ascii_lowercase().as_str() {
        "select" | "press" => Event::press(Button::SelectEncoder),
        "release" => Event::release(Button::SelectEncoder),
        "back" => Event::press(Button::Back),
        "shift" => Event::press(Button::Shift),
        other => {
            // i32 parsing accepts a leading '+'
            Event::encoder(EncoderName::Select, other.parse::<i32>().ok()?)
        }
    };
    Some(event)
}
