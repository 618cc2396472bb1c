//! Optional diagnostic output.
//!
//! The parser reports progress and failures to a [`DiagnosticSink`]. The
//! default [`NullSink`] drops every message; connect a [`WriterSink`] to send
//! lines to a stream, or a [`TracingSink`] to route them through `tracing`.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Debug,
    Warn,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receiver for human-readable trace lines.
///
/// Parsing results never depend on what a sink does with a message.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, level: DiagnosticLevel, message: &str);
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: DiagnosticLevel, _message: &str) {}
}

/// Forwards messages to `tracing` events under the `csvtab` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Debug => tracing::debug!(target: "csvtab", "{message}"),
            DiagnosticLevel::Warn => tracing::warn!(target: "csvtab", "{message}"),
            DiagnosticLevel::Error => tracing::error!(target: "csvtab", "{message}"),
        }
    }
}

/// Writes `[level] message` lines to a stream.
///
/// Write failures are ignored.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    min_level: DiagnosticLevel,
}

impl<W: Write + Send> WriterSink<W> {
    /// Sink that writes every level.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: DiagnosticLevel::Debug,
        }
    }

    /// Drop messages below `level`.
    #[must_use]
    pub fn with_min_level(mut self, level: DiagnosticLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DiagnosticSink for WriterSink<W> {
    fn emit(&self, level: DiagnosticLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "[{level}] {message}");
    }
}

impl<W: Write + Send> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
