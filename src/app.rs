//! Application driver.
//!
//! This module defines the [`App`] that connects the selection session with
//! the terminal: it draws a frame, blocks for the next terminal event,
//! translates it into a picker event and feeds it to the session, until the
//! session produces a result.

use std::io;

use anyhow::{Context, Result};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::event::{self, max_visible_for, UserEvent};
use crate::history::History;
use crate::selection::{SelectionSession, Step};
use crate::ui::PickerView;

pub struct App<'h> {
    session: SelectionSession<'h>,
    prompt: String,
    // Terminal height, used to re-derive the match capacity
    rows: u16,
}

impl<'h> App<'h> {
    pub fn new(history: &'h History, prompt: impl Into<String>, rows: u16) -> Self {
        Self {
            session: SelectionSession::new(history, max_visible_for(rows)),
            prompt: prompt.into(),
            rows,
        }
    }

    pub fn session(&self) -> &SelectionSession<'h> {
        &self.session
    }

    /// Run until the user accepts or aborts, returning the selected command.
    ///
    /// `next_event` blocks for the next terminal event; it is the only place
    /// control leaves the picker.
    pub fn run<B, F>(&mut self, terminal: &mut Terminal<B>, mut next_event: F) -> Result<String>
    where
        B: Backend,
        F: FnMut() -> io::Result<UserEvent>,
    {
        // draw 1st frame
        self.draw(terminal)?;
        loop {
            let user_event = next_event().context("Failed to read terminal event")?;
            if let UserEvent::Resize(_, rows) = user_event {
                self.rows = rows;
            }
            let Some(picker_event) = event::translate(&user_event, self.rows) else {
                continue;
            };

            match self.session.handle(picker_event) {
                Step::Done(result) => {
                    info!(
                        "Picker finished after filtering on {:?}",
                        self.session.fragment().as_str()
                    );
                    return Ok(result);
                }
                Step::Ignored => {}
                Step::Redraw | Step::Highlight => self.draw(terminal)?,
            }
        }
    }

    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = PickerView::new(self.session.view(), &self.prompt);
        let frame = terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(&view, area);
            // Leaving the cursor unset hides it while browsing.
            if let Some(position) = view.cursor_position(area) {
                frame.set_cursor_position(position);
            }
        })?;
        debug!("Drew frame {} ({} rows)", frame.count, frame.area.height);
        Ok(())
    }
}
