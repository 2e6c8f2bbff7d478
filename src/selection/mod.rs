//! Interactive selection state.
//!
//! A [`SelectionSession`] owns everything that changes while the picker runs:
//! the fragment, the current match list and the cursor. It consumes one
//! [`PickerEvent`] at a time and tells the display what to do next through a
//! [`Step`].
//!
//! The cursor is either at the prompt (editing) or on a match (browsing).
//! Whenever the match list is rebuilt the cursor is clamped in the same call,
//! so a render request never carries a highlight past the end of the list.

mod fragment;

use tracing::{debug, trace};

use crate::event::PickerEvent;
use crate::filter::MatchList;
use crate::history::History;

pub use fragment::Fragment;

/// Selection pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Editing the fragment; no match highlighted.
    #[default]
    AtPrompt,
    /// Browsing; match `k` highlighted.
    AtIndex(usize),
}

/// What the display has to do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fragment or match list changed; redraw everything.
    Redraw,
    /// Only the highlighted row moved.
    Highlight,
    /// Nothing changed.
    Ignored,
    /// The session is over with this result (possibly empty).
    Done(String),
}

/// Everything the display needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub fragment: &'a Fragment,
    pub matches: &'a MatchList<'a>,
    pub cursor: Cursor,
    pub max_visible: usize,
}

/// State of one interactive run over a loaded history.
#[derive(Debug)]
pub struct SelectionSession<'h> {
    history: &'h History,
    fragment: Fragment,
    matches: MatchList<'h>,
    cursor: Cursor,
    max_visible: usize,
    finished: bool,
}

impl<'h> SelectionSession<'h> {
    /// Start editing with an empty fragment and the unfiltered top of history.
    pub fn new(history: &'h History, max_visible: usize) -> Self {
        let mut session = Self {
            history,
            fragment: Fragment::new(),
            matches: MatchList::new(),
            cursor: Cursor::AtPrompt,
            max_visible,
            finished: false,
        };
        session.recompute();
        session
    }

    /// Process one event to completion.
    ///
    /// Once the session is done every further event is ignored.
    pub fn handle(&mut self, event: PickerEvent) -> Step {
        if self.finished {
            return Step::Ignored;
        }
        trace!("Handling {:?} with cursor {:?}", event, self.cursor);

        match event {
            PickerEvent::Char(c) => {
                if !self.fragment.push(c) {
                    return Step::Ignored;
                }
                self.recompute();
                Step::Redraw
            }
            PickerEvent::Backspace => {
                self.fragment.pop();
                self.recompute();
                Step::Redraw
            }
            PickerEvent::Down => self.move_down(),
            PickerEvent::Up => self.move_up(),
            PickerEvent::Accept => {
                let result = match self.cursor {
                    Cursor::AtIndex(k) => self.matches.get(k),
                    Cursor::AtPrompt => self.matches.first(),
                }
                .unwrap_or_default()
                .to_string();
                self.finish(result)
            }
            PickerEvent::Abort => self.finish(String::new()),
            PickerEvent::Resize(max_visible) => {
                self.max_visible = max_visible;
                self.recompute();
                Step::Redraw
            }
        }
    }

    pub fn view(&self) -> RenderRequest<'_> {
        RenderRequest {
            fragment: &self.fragment,
            matches: &self.matches,
            cursor: self.cursor,
            max_visible: self.max_visible,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn matches(&self) -> &MatchList<'h> {
        &self.matches
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn move_down(&mut self) -> Step {
        let len = self.matches.len();
        if len == 0 {
            return Step::Ignored;
        }
        self.cursor = match self.cursor {
            Cursor::AtPrompt => Cursor::AtIndex(0),
            Cursor::AtIndex(k) => Cursor::AtIndex((k + 1) % len),
        };
        Step::Highlight
    }

    fn move_up(&mut self) -> Step {
        self.cursor = match self.cursor {
            Cursor::AtPrompt => return Step::Ignored,
            Cursor::AtIndex(0) => Cursor::AtPrompt,
            Cursor::AtIndex(k) => Cursor::AtIndex(k - 1),
        };
        Step::Highlight
    }

    fn finish(&mut self, result: String) -> Step {
        debug!("Selection finished with {} byte result", result.len());
        self.finished = true;
        Step::Done(result)
    }

    /// Rebuild the match list and clamp the cursor into it.
    fn recompute(&mut self) {
        self.matches.refill(
            self.history.lines(),
            self.fragment.as_filter(),
            self.max_visible,
        );
        if let Cursor::AtIndex(k) = self.cursor
            && k >= self.matches.len()
        {
            self.cursor = Cursor::AtPrompt;
        }
        trace!(
            "Fragment {:?} matched {} lines (limit {})",
            self.fragment.as_str(),
            self.matches.len(),
            self.max_visible
        );
    }
}
