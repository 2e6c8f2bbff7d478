//! In-memory history store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure to obtain the history source.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file not available: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no history file configured: neither HISTFILE nor HOME is set")]
    NotConfigured,
}

/// Immutable history lines, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    /// Build a history from lines in file order (oldest first).
    ///
    /// The collection is reversed once here so that the most recently
    /// entered command comes first.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        lines.reverse();
        Self { lines }
    }

    /// Load a history file from disk.
    ///
    /// Lines are split on `\n` only and kept verbatim; the empty piece after
    /// a final newline is not a history line. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let bytes = fs::read(path).map_err(|source| HistoryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let history = Self::from_lines(split_lines(&text));
        if history.is_empty() {
            warn!("History file {} is empty", path.display());
        } else {
            info!("Loaded {} history lines from {}", history.len(), path.display());
        }
        debug!("History file size: {} bytes", bytes.len());
        Ok(history)
    }

    /// All lines, most recent first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let mut pieces = body.split('\n');
    if body.is_empty() {
        // An empty file (or a lone newline) has no lines at all.
        pieces.next();
    }
    pieces
}
