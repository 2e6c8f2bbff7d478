//! Picker screen layout.
//!
//! ```text
//! row 0
//! row 1  user@host$ <fragment>
//! row 2  Type to filter history, ...
//! row 3   HISTORY ██████████████████
//! row 4  >first match
//! row 5   second match
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::selection::{Cursor, RenderRequest};

pub const LABEL_HISTORY: &str = " HISTORY ";
pub const LABEL_HELP: &str =
    "Type to filter history, use UP and DOWN arrows to navigate, ENTER to select, ESC to cancel";

const ROW_PROMPT: u16 = 1;
const ROW_HELP: u16 = 2;
const ROW_LABEL: u16 = 3;
const ROW_ITEMS: u16 = 4;

const SELECTION_MARKER: &str = ">";

/// One frame of the picker.
#[derive(Debug, Clone, Copy)]
pub struct PickerView<'a> {
    request: RenderRequest<'a>,
    prompt: &'a str,
}

impl<'a> PickerView<'a> {
    /// `prompt` is the `user@host$ ` prefix shown before the fragment.
    pub fn new(request: RenderRequest<'a>, prompt: &'a str) -> Self {
        Self { request, prompt }
    }

    /// Where the hardware cursor belongs, if it should be shown at all.
    ///
    /// While browsing the highlighted row is the only cursor.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if self.request.cursor != Cursor::AtPrompt || area.height <= ROW_PROMPT {
            return None;
        }
        let column = self.prompt.width() + self.request.fragment.as_str().width();
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(column)
            .min(area.right().saturating_sub(1));
        Some((x, area.y + ROW_PROMPT))
    }

    fn prompt_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::raw(self.prompt),
            Span::styled(
                self.request.fragment.as_str(),
                Style::new().add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn label_line(width: u16) -> Line<'static> {
        let text = format!("{:<width$}", LABEL_HISTORY, width = usize::from(width));
        Line::styled(text, Style::new().add_modifier(Modifier::REVERSED))
    }

    fn match_line(&self, index: usize) -> Option<Line<'a>> {
        let matches = self.request.matches;
        let text = matches.get(index)?;
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let line = match matches.emphasis(index, self.request.fragment.as_str()) {
            Some(range) => Line::from(vec![
                Span::raw(&text[..range.start]),
                Span::styled(&text[range.clone()], bold),
                Span::raw(&text[range.end..]),
            ]),
            None => Line::raw(text),
        };
        Some(line)
    }
}

impl Widget for &PickerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row = |offset: u16| -> Option<Rect> {
            (offset < area.height).then(|| Rect::new(area.x, area.y + offset, area.width, 1))
        };

        if let Some(rect) = row(ROW_PROMPT) {
            self.prompt_line().render(rect, buf);
        }
        if let Some(rect) = row(ROW_HELP) {
            Line::raw(LABEL_HELP).render(rect, buf);
        }
        if let Some(rect) = row(ROW_LABEL) {
            PickerView::label_line(area.width).render(rect, buf);
        }

        let highlighted = match self.request.cursor {
            Cursor::AtIndex(k) => Some(k),
            Cursor::AtPrompt => None,
        };
        let visible = self.request.max_visible.min(self.request.matches.len());
        for index in 0..visible {
            let Ok(offset) = u16::try_from(index) else {
                break;
            };
            let Some(rect) = row(ROW_ITEMS.saturating_add(offset)) else {
                break;
            };
            if highlighted == Some(index) {
                Line::raw(SELECTION_MARKER).render(rect, buf);
            }
            let text_area = Rect {
                x: rect.x.saturating_add(1),
                width: rect.width.saturating_sub(1),
                ..rect
            };
            if let Some(line) = self.match_line(index) {
                line.render(text_area, buf);
            }
        }
    }
}
