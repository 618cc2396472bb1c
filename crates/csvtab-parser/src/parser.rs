//! The configurable read/write engine.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csvtab_model::Table;

use crate::config::{ParserConfig, Quoting};
use crate::diagnostics::{DiagnosticLevel, DiagnosticSink, NullSink};
use crate::error::{ParseError, Result};
use crate::storage::{FsStorage, Storage};
use crate::{tokenize, writer};

const UTF8_BOM: &str = "\u{feff}";

/// Reads delimited text files into [`Table`]s and writes them back.
///
/// Configuration is set before calling [`read_entire_file`](Self::read_entire_file)
/// or [`write`](Self::write); each call is independent and returns an owned
/// value.
#[derive(Clone)]
pub struct Parser {
    config: ParserConfig,
    filename: Option<PathBuf>,
    storage: Arc<dyn Storage>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_config(ParserConfig::default())
    }
}

impl Parser {
    /// Parser with default configuration, filesystem storage and no diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with the given configuration, filesystem storage and no diagnostics.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            filename: None,
            storage: Arc::new(FsStorage),
            diagnostics: Arc::new(NullSink),
        }
    }

    /// Replace the file provider.
    #[must_use]
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = storage;
        self
    }

    /// Connect a diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Replace the diagnostic sink in place.
    pub fn set_diagnostics(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.diagnostics = sink;
    }

    /// Current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Mutable access to the configuration; changes apply to later calls.
    pub fn config_mut(&mut self) -> &mut ParserConfig {
        &mut self.config
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: ParserConfig) {
        self.config = config;
    }

    /// Set the separator between fields.
    pub fn set_field_delimiter(&mut self, delimiter: impl Into<String>) {
        self.config.field_delimiter = delimiter.into();
    }

    /// Set the separator between records.
    pub fn set_record_delimiter(&mut self, delimiter: impl Into<String>) {
        self.config.record_delimiter = delimiter.into();
    }

    /// Enable quoted fields with `Some`, disable them with `None`.
    pub fn set_quoting(&mut self, quoting: Option<Quoting>) {
        self.config.quoting = quoting;
    }

    /// Store the path used by later reads and writes.
    ///
    /// Nothing is opened or checked here.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Path set by [`set_filename`](Self::set_filename), if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Read the configured file and tokenize all of it.
    ///
    /// A missing file is [`ParseError::FileNotFound`], never an empty table.
    /// A leading UTF-8 byte order mark is skipped.
    pub fn read_entire_file(&self) -> Result<Table> {
        let path = self.require_filename()?;
        self.check_config()?;
        self.debug(&format!("reading {}", path.display()));

        let bytes = self
            .storage
            .read(path)
            .map_err(|e| self.fail(ParseError::from_read(path.to_path_buf(), e)))?;
        self.debug(&format!("read {} bytes from {}", bytes.len(), path.display()));

        let text = String::from_utf8(bytes).map_err(|e| {
            self.fail(ParseError::InvalidEncoding {
                path: path.to_path_buf(),
                valid_up_to: e.utf8_error().valid_up_to(),
            })
        })?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(&text);

        let table = self.tokenize(text)?;
        self.debug(&format!(
            "parsed {} records from {}",
            table.num_records(),
            path.display()
        ));
        Ok(table)
    }

    /// Tokenize in-memory text with the current configuration.
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        self.check_config()?;
        self.tokenize(text)
    }

    /// Render `table` as delimited text with the current configuration.
    pub fn serialize(&self, table: &Table) -> Result<String> {
        self.check_config()?;
        Ok(writer::serialize(
            table,
            &self.config,
            self.diagnostics.as_ref(),
        ))
    }

    /// Serialize `table` and write it to the configured file, replacing any
    /// existing content.
    pub fn write(&self, table: &Table) -> Result<()> {
        let path = self.require_filename()?;
        let text = self.serialize(table)?;

        self.storage
            .write(path, text.as_bytes())
            .map_err(|source| {
                self.fail(ParseError::Write {
                    path: path.to_path_buf(),
                    source,
                })
            })?;
        self.debug(&format!(
            "wrote {} records ({} bytes) to {}",
            table.num_records(),
            text.len(),
            path.display()
        ));
        Ok(())
    }

    fn tokenize(&self, text: &str) -> Result<Table> {
        tokenize::tokenize(text, &self.config).map_err(|e| self.fail(e))
    }

    fn require_filename(&self) -> Result<&Path> {
        self.filename
            .as_deref()
            .ok_or_else(|| self.fail(ParseError::NoFilename))
    }

    fn check_config(&self) -> Result<()> {
        self.config.validate().map_err(|e| self.fail(e))
    }

    fn debug(&self, message: &str) {
        self.diagnostics.emit(DiagnosticLevel::Debug, message);
    }

    /// Report `err` to the sink and hand it back for returning.
    fn fail(&self, err: ParseError) -> ParseError {
        self.diagnostics
            .emit(DiagnosticLevel::Error, &err.to_string());
        err
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("config", &self.config)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}
