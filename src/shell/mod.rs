//! Handing the selected command back to the shell.
//!
//! The picker runs as a child of the interactive shell, so it cannot set the
//! shell's command line directly. Instead the command is typed into the
//! controlling terminal's input queue, where the shell's line editor reads
//! it as if the user had entered it.

mod inject;

pub use inject::{hand_off, Injector, PrintInjector, TiocstiError, TiocstiInjector};
