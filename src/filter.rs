//! Incremental filter and deduplication of history lines.
//!
//! Every edit of the fragment reruns [`filter`] over the whole history. The
//! scan has two ordered phases sharing one seen-set keyed by exact text:
//!
//! 1. **Prefix phase**: lines starting with the fragment, in history order.
//!    With no fragment every line qualifies.
//! 2. **Substring phase**: lines containing the fragment somewhere past the
//!    first byte, again in history order.
//!
//! The first occurrence of a given text wins, prefix matches always precede
//! substring matches, and the list never grows past its limit.

use std::collections::HashSet;
use std::ops::Range;

/// Bounded, ordered, duplicate-free view into a history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchList<'h> {
    items: Vec<&'h str>,
}

impl<'h> MatchList<'h> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild this list in place for `fragment`, keeping at most `limit` lines.
    ///
    /// The backing buffer is cleared and reused, so repeated calls only
    /// allocate when the limit grows.
    pub fn refill(&mut self, history: &'h [String], fragment: Option<&str>, limit: usize) {
        self.items.clear();
        self.items.reserve(limit.min(history.len()));
        if limit == 0 {
            return;
        }

        let fragment = fragment.filter(|f| !f.is_empty());
        let mut seen: HashSet<&'h str> = HashSet::with_capacity(limit.min(history.len()));

        for line in history {
            if self.items.len() >= limit {
                return;
            }
            let line = line.as_str();
            let accepted = match fragment {
                None => true,
                Some(f) => line.starts_with(f),
            };
            if accepted && seen.insert(line) {
                self.items.push(line);
            }
        }

        let Some(fragment) = fragment else {
            return;
        };
        for line in history {
            if self.items.len() >= limit {
                return;
            }
            let line = line.as_str();
            if seen.contains(line) {
                continue;
            }
            if matches!(line.find(fragment), Some(offset) if offset > 0) {
                seen.insert(line);
                self.items.push(line);
            }
        }
    }

    /// Byte range of the first occurrence of `fragment` within match `index`.
    pub fn emphasis(&self, index: usize, fragment: &str) -> Option<Range<usize>> {
        if fragment.is_empty() {
            return None;
        }
        let line = self.items.get(index)?;
        let start = line.find(fragment)?;
        Some(start..start + fragment.len())
    }

    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.items.get(index).copied()
    }

    pub fn first(&self) -> Option<&'h str> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'h str> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'h str] {
        &self.items
    }
}

/// Filter `history` (most-recent-first) against `fragment`, keeping at most `limit` lines.
///
/// An empty fragment behaves like no fragment at all.
pub fn filter<'h>(history: &'h [String], fragment: Option<&str>, limit: usize) -> MatchList<'h> {
    let mut matches = MatchList::new();
    matches.refill(history, fragment, limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_matches_precede_substring_matches() {
        let history = lines(&["abcd", "xabc", "abce"]);
        let matches = filter(&history, Some("ab"), 10);
        assert_eq!(matches.as_slice(), ["abcd", "abce", "xabc"]);
    }

    #[test]
    fn test_no_fragment_keeps_history_order() {
        let history = lines(&["git status", "ls", "git status", "cargo test"]);
        let matches = filter(&history, None, 10);
        assert_eq!(matches.as_slice(), ["git status", "ls", "cargo test"]);
    }

    #[test]
    fn test_empty_fragment_is_no_filter() {
        let history = lines(&["b", "a", "b"]);
        assert_eq!(filter(&history, Some(""), 10), filter(&history, None, 10));
    }

    #[test]
    fn test_empty_history() {
        let history: Vec<String> = Vec::new();
        assert!(filter(&history, None, 5).is_empty());
        assert!(filter(&history, Some("x"), 5).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let history = lines(&["a", "b"]);
        assert!(filter(&history, None, 0).is_empty());
        assert!(filter(&history, Some("a"), 0).is_empty());
    }

    #[test]
    fn test_limit_stops_prefix_phase() {
        let history = lines(&["g1", "g2", "g3", "xg"]);
        let matches = filter(&history, Some("g"), 2);
        assert_eq!(matches.as_slice(), ["g1", "g2"]);
    }

    #[test]
    fn test_substring_phase_fills_remaining_room() {
        let history = lines(&["make", "cmake ..", "xmake", "make"]);
        let matches = filter(&history, Some("make"), 2);
        assert_eq!(matches.as_slice(), ["make", "cmake .."]);
    }

    #[test]
    fn test_duplicate_text_first_occurrence_wins() {
        let history = lines(&["ls -la", "vim ls", "ls -la", "vim ls"]);
        let matches = filter(&history, Some("ls"), 10);
        assert_eq!(matches.as_slice(), ["ls -la", "vim ls"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let history = lines(&["Git log", "git log"]);
        let matches = filter(&history, Some("git"), 10);
        assert_eq!(matches.as_slice(), ["git log"]);
    }

    #[test]
    fn test_non_matching_lines_are_dropped() {
        let history = lines(&["ls", "pwd", "echo hi"]);
        assert!(filter(&history, Some("zzz"), 10).is_empty());
    }

    #[test]
    fn test_refill_reuses_buffer() {
        let history = lines(&["ab", "b", "cab"]);
        let mut matches = MatchList::new();
        matches.refill(&history, Some("ab"), 3);
        assert_eq!(matches.as_slice(), ["ab", "cab"]);
        matches.refill(&history, Some("b"), 3);
        assert_eq!(matches.as_slice(), ["b", "ab", "cab"]);
        matches.refill(&history, None, 1);
        assert_eq!(matches.as_slice(), ["ab"]);
    }

    #[test]
    fn test_emphasis_finds_first_occurrence() {
        let history = lines(&["echo echo"]);
        let matches = filter(&history, Some("cho"), 1);
        assert_eq!(matches.emphasis(0, "cho"), Some(1..4));
        assert_eq!(matches.emphasis(0, ""), None);
        assert_eq!(matches.emphasis(1, "cho"), None);
    }

    proptest! {
        #[test]
        fn prop_never_returns_duplicates(
            history in proptest::collection::vec("[abc ]{0,4}", 0..40),
            fragment in proptest::option::of("[abc]{0,2}"),
            limit in 0usize..50,
        ) {
            let matches = filter(&history, fragment.as_deref(), limit);
            let unique: HashSet<&str> = matches.iter().collect();
            prop_assert_eq!(unique.len(), matches.len());
        }

        #[test]
        fn prop_respects_limit(
            history in proptest::collection::vec("[ab]{0,3}", 0..40),
            fragment in proptest::option::of("[ab]{0,2}"),
            limit in 0usize..20,
        ) {
            prop_assert!(filter(&history, fragment.as_deref(), limit).len() <= limit);
        }

        #[test]
        fn prop_no_fragment_is_unique_prefix_of_history(
            history in proptest::collection::vec("[xyz]{0,3}", 0..40),
            limit in 0usize..50,
        ) {
            let mut seen = HashSet::new();
            let expected: Vec<&str> = history
                .iter()
                .map(String::as_str)
                .filter(|line| seen.insert(*line))
                .take(limit)
                .collect();
            let matches = filter(&history, None, limit);
            prop_assert_eq!(matches.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_every_match_contains_fragment(
            history in proptest::collection::vec("[abc]{0,5}", 0..40),
            fragment in "[abc]{1,2}",
        ) {
            let matches = filter(&history, Some(fragment.as_str()), usize::MAX);
            let mut in_substring_phase = false;
            for line in matches.iter() {
                prop_assert!(line.contains(fragment.as_str()));
                if !line.starts_with(fragment.as_str()) {
                    in_substring_phase = true;
                } else {
                    prop_assert!(!in_substring_phase, "prefix match after substring match");
                }
            }
        }
    }
}
