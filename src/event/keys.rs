//! Key code to logical event mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{max_visible_for, PickerEvent};

/// Converts a crossterm key event to a picker event.
///
/// Returns `None` for releases and for keys the picker has no use for, so
/// they never reach the fragment.
pub fn from_key(key_event: KeyEvent, rows: u16) -> Option<PickerEvent> {
    let KeyEvent { code, modifiers, kind, .. } = key_event;
    if kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' | 'd' | 'g' => Some(PickerEvent::Abort),
            'h' => Some(PickerEvent::Backspace),
            'j' | 'm' => Some(PickerEvent::Accept),
            'n' => Some(PickerEvent::Down),
            'p' => Some(PickerEvent::Up),
            // Ctrl+A / Ctrl+E only refresh the view.
            'a' | 'e' => Some(PickerEvent::Resize(max_visible_for(rows))),
            _ => None,
        },
        KeyCode::Char(_) if alt => None,
        KeyCode::Char(c) if c.is_control() => None,
        KeyCode::Char(c) => Some(PickerEvent::Char(c)),
        KeyCode::Backspace => Some(PickerEvent::Backspace),
        KeyCode::Enter => Some(PickerEvent::Accept),
        KeyCode::Esc => Some(PickerEvent::Abort),
        KeyCode::Up => Some(PickerEvent::Up),
        KeyCode::Down => Some(PickerEvent::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_chars() {
        assert_eq!(from_key(key(KeyCode::Char('a')), 24), Some(PickerEvent::Char('a')));
        assert_eq!(from_key(key(KeyCode::Char(' ')), 24), Some(PickerEvent::Char(' ')));
        assert_eq!(from_key(key(KeyCode::Char('ž')), 24), Some(PickerEvent::Char('ž')));
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(from_key(shifted, 24), Some(PickerEvent::Char('A')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(from_key(key(KeyCode::Up), 24), Some(PickerEvent::Up));
        assert_eq!(from_key(key(KeyCode::Down), 24), Some(PickerEvent::Down));
        assert_eq!(from_key(ctrl('p'), 24), Some(PickerEvent::Up));
        assert_eq!(from_key(ctrl('n'), 24), Some(PickerEvent::Down));
    }

    #[test]
    fn test_editing_and_terminal_keys() {
        assert_eq!(from_key(key(KeyCode::Backspace), 24), Some(PickerEvent::Backspace));
        assert_eq!(from_key(ctrl('h'), 24), Some(PickerEvent::Backspace));
        assert_eq!(from_key(key(KeyCode::Enter), 24), Some(PickerEvent::Accept));
        assert_eq!(from_key(ctrl('j'), 24), Some(PickerEvent::Accept));
        assert_eq!(from_key(key(KeyCode::Esc), 24), Some(PickerEvent::Abort));
        assert_eq!(from_key(ctrl('c'), 24), Some(PickerEvent::Abort));
        assert_eq!(from_key(ctrl('D'), 24), Some(PickerEvent::Abort));
    }

    #[test]
    fn test_refresh_keys_rederive_limit() {
        assert_eq!(from_key(ctrl('a'), 30), Some(PickerEvent::Resize(24)));
        assert_eq!(from_key(ctrl('e'), 10), Some(PickerEvent::Resize(4)));
    }

    #[test]
    fn test_unrecognized_keys_are_dropped() {
        assert_eq!(from_key(key(KeyCode::Left), 24), None);
        assert_eq!(from_key(key(KeyCode::Tab), 24), None);
        assert_eq!(from_key(key(KeyCode::F(1)), 24), None);
        assert_eq!(from_key(key(KeyCode::Char('\u{7}')), 24), None);
        assert_eq!(from_key(ctrl('z'), 24), None);
        let alt = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT);
        assert_eq!(from_key(alt, 24), None);
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(from_key(release, 24), None);
    }
}
