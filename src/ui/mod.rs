//! User interface module for the picker.
//!
//! This module contains the terminal lifecycle guard and the widget that
//! draws one [`RenderRequest`](crate::selection::RenderRequest): the prompt
//! row, the help row, the history label and the match rows.

pub mod picker;
pub mod terminal;

pub use picker::PickerView;
pub use terminal::TerminalGuard;
