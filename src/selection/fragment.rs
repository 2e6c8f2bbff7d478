//! The user-edited filter text.

use std::fmt;

/// What the user has typed so far.
///
/// Grows one character at a time and never holds control characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    text: String,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one character. Control characters are refused.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The fragment as a filter needle; empty means no filter.
    pub fn as_filter(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut fragment = Fragment::new();
        assert!(fragment.push('g'));
        assert!(fragment.push('ï'));
        assert_eq!(fragment.as_str(), "gï");
        assert_eq!(fragment.pop(), Some('ï'));
        assert_eq!(fragment.as_str(), "g");
    }

    #[test]
    fn test_control_chars_are_refused() {
        let mut fragment = Fragment::new();
        assert!(!fragment.push('\n'));
        assert!(!fragment.push('\u{1b}'));
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_empty_fragment_is_no_filter() {
        let mut fragment = Fragment::new();
        assert_eq!(fragment.as_filter(), None);
        assert_eq!(fragment.pop(), None);
        fragment.push('x');
        assert_eq!(fragment.as_filter(), Some("x"));
    }
}
