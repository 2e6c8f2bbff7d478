//! Logical input events for the picker.
//!
//! The terminal delivers raw crossterm events; the picker only understands a
//! small closed set of [`PickerEvent`]s. Anything that does not translate is
//! dropped here, before it can reach the selection state.
//!
//! # Submodules
//!
//! - `keys`: Key code to logical event mapping

mod keys;

use std::io::Result;

pub use keys::from_key;

/// Type alias for user input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Rows taken by the picker chrome: top margin, prompt, help, label and two
/// rows kept free at the bottom.
pub const CHROME_ROWS: u16 = 6;

/// One logical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Append one printable character to the fragment.
    Char(char),
    /// Drop the last character of the fragment.
    Backspace,
    Up,
    Down,
    /// Select the highlighted match, or the top one from the prompt.
    Accept,
    /// Leave without a selection.
    Abort,
    /// The display can now show this many matches.
    Resize(usize),
}

/// Number of match rows that fit in a terminal `rows` tall.
pub fn max_visible_for(rows: u16) -> usize {
    usize::from(rows.saturating_sub(CHROME_ROWS))
}

/// Translate a raw terminal event.
///
/// `rows` is the current terminal height, used for events that re-derive the
/// visible match count.
pub fn translate(event: &UserEvent, rows: u16) -> Option<PickerEvent> {
    match event {
        UserEvent::Key(key) => keys::from_key(*key, rows),
        UserEvent::Resize(_, new_rows) => Some(PickerEvent::Resize(max_visible_for(*new_rows))),
        _ => None,
    }
}

/// Block until the terminal delivers its next event.
///
/// This is the only suspension point of the picker.
pub fn next_user_event() -> Result<UserEvent> {
    crossterm::event::read()
}
