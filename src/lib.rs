//! rusty-hstr - An interactive shell history picker
//!
//! This library provides the core of the picker:
//! - Loading the shell history file in most-recent-first order
//! - Incremental two-phase filtering with deduplication
//! - The selection state machine driven by logical key events
//! - Rendering the picker screen and handing the result back to the shell
//!
//! # Example
//!
//! ```
//! use rusty_hstr::event::PickerEvent;
//! use rusty_hstr::history::History;
//! use rusty_hstr::selection::{SelectionSession, Step};
//!
//! let history = History::from_lines(["grep x", "go build", "git status"]);
//! let mut session = SelectionSession::new(&history, 10);
//!
//! session.handle(PickerEvent::Char('g'));
//! assert_eq!(
//!     session.handle(PickerEvent::Accept),
//!     Step::Done("git status".to_string())
//! );
//! ```

pub mod app;
pub mod config;
pub mod event;
pub mod filter;
pub mod history;
pub mod selection;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use config::{Cli, Config, OutputMode};
pub use event::PickerEvent;
pub use filter::{filter, MatchList};
pub use history::{History, HistoryError};
pub use selection::{Cursor, Fragment, RenderRequest, SelectionSession, Step};
