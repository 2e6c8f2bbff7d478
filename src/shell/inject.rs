//! Terminal injectors.

use std::io::{self, Write};
use std::os::fd::{AsRawFd, RawFd};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, warn};

// Push one byte into a terminal's input queue.
nix::ioctl_write_ptr_bad!(tiocsti, libc::TIOCSTI, libc::c_char);

/// Destination for the selected command.
pub trait Injector {
    /// Hand `text` off verbatim. An empty `text` does nothing.
    fn inject(&mut self, text: &str) -> Result<()>;
}

/// `TIOCSTI` refused a byte.
///
/// `pushed` bytes were already queued before the failure and are sitting in
/// the terminal's input.
#[derive(Debug, Error)]
#[error("TIOCSTI failed on fd {fd} after {pushed} of {total} bytes")]
pub struct TiocstiError {
    pub fd: RawFd,
    pub pushed: usize,
    pub total: usize,
    #[source]
    pub source: nix::Error,
}

/// Types the command into the controlling terminal with `TIOCSTI`.
///
/// Some kernels disable `TIOCSTI` for unprivileged processes; a
/// [`TiocstiError`] is returned so the caller can fall back to
/// [`PrintInjector`].
pub struct TiocstiInjector {
    fd: RawFd,
}

impl TiocstiInjector {
    /// Inject into the terminal behind stdin.
    pub fn stdin() -> Self {
        Self {
            fd: io::stdin().as_raw_fd(),
        }
    }
}

impl Injector for TiocstiInjector {
    fn inject(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let total = text.len();
        for (pushed, byte) in text.bytes().enumerate() {
            let c = byte as libc::c_char;
            // SAFETY: `c` outlives the call and TIOCSTI only reads one byte from it.
            unsafe { tiocsti(self.fd, &c) }.map_err(|source| TiocstiError {
                fd: self.fd,
                pushed,
                total,
                source,
            })?;
        }
        // Move the shell prompt below the picker's last line.
        let mut out = io::stdout().lock();
        out.write_all(b"\n")?;
        out.flush()?;
        debug!("Injected {} bytes into the terminal", text.len());
        Ok(())
    }
}

/// Writes the command followed by a newline to any writer.
pub struct PrintInjector<W: Write> {
    out: W,
}

impl<W: Write> PrintInjector<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PrintInjector<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Injector for PrintInjector<W> {
    fn inject(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush())
            .context("Failed to print selected command")?;
        Ok(())
    }
}

/// Hand `text` to `primary`, using `fallback` only if nothing reached the terminal.
///
/// A `TIOCSTI` failure on the first byte leaves the command line untouched,
/// so the whole command goes to `fallback`. A failure after some bytes were
/// queued is returned as is; printing the command again would duplicate it.
pub fn hand_off<P, F>(primary: &mut P, fallback: &mut F, text: &str) -> Result<()>
where
    P: Injector,
    F: Injector,
{
    let Err(e) = primary.inject(text) else {
        return Ok(());
    };
    let partial = matches!(e.downcast_ref::<TiocstiError>(), Some(err) if err.pushed > 0);
    if partial {
        return Err(e.context("Selected command was only partially injected"));
    }
    warn!("Falling back to printing the command: {:#}", e);
    fallback.inject(text)
}
