//! Call-site capture and best-effort source line retrieval.
//!
//! A [`CallSite`] records where a value was created: a file path and a
//! 1-based line number, optionally with the source text already in hand.
//! It is captured once, at construction time, and never mutated afterwards;
//! the line of source text is derived from it on demand.

use std::fs;
use std::path::{Path, PathBuf};

/// The location of a construction call.
///
/// Source retrieval is inherently best-effort: the file may have been moved,
/// truncated, or never existed (REPL input, generated code). Every failure
/// mode collapses to "no source line" rather than an error, because a
/// missing line only means the caller falls back to scope scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file: PathBuf,
    line: u32,
    source: Option<String>,
}

impl CallSite {
    /// A call site whose source text will be read from `file` on demand.
    ///
    /// `line` is 1-based, matching compiler and traceback conventions.
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            source: None,
        }
    }

    /// A call site whose source text is already known.
    ///
    /// Used when the embedder holds the source in memory (it usually does,
    /// having just executed it) and by tests. The stored text wins over
    /// whatever is on disk.
    pub fn with_source(file: impl Into<PathBuf>, line: u32, source: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            source: Some(source.into()),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The single line of source text at this site, if retrievable.
    ///
    /// Returns the preloaded text when present, otherwise reads the file and
    /// extracts the recorded line. A zero or out-of-range line number, an
    /// unreadable file, and non-UTF-8 content all yield `None`.
    pub fn source_line(&self) -> Option<String> {
        if let Some(source) = &self.source {
            return Some(source.clone());
        }
        if self.line == 0 {
            return None;
        }
        let content = fs::read_to_string(&self.file).ok()?;
        content
            .lines()
            .nth(self.line as usize - 1)
            .map(str::to_string)
    }
}
