//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// How a literal quote is written inside a quoted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeRule {
    /// A doubled quote (`""`) stands for one quote.
    #[default]
    Doubled,
    /// `\"` stands for one quote and `\\` for one backslash.
    ///
    /// A backslash before any other character is kept together with it.
    Backslash,
}

/// Quoted-field handling.
///
/// A quote opens a quoted section only at the start of a field. Inside it both
/// delimiters are plain content; after the closing quote, characters up to the
/// next delimiter are appended as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quoting {
    pub quote: char,
    pub escape: EscapeRule,
}

impl Default for Quoting {
    fn default() -> Self {
        Self {
            quote: '"',
            escape: EscapeRule::Doubled,
        }
    }
}

impl Quoting {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeRule) -> Self {
        self.escape = escape;
        self
    }
}

/// Delimiter and quoting options shared by the read and write paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Separator between fields within a record (default: `,`).
    pub field_delimiter: String,
    /// Separator between records (default: `\n`).
    ///
    /// Matched as an exact substring: `\n` does not recognise `\r\n` line
    /// endings and vice versa.
    pub record_delimiter: String,
    /// Quoted-field support; `None` disables it (default).
    pub quoting: Option<Quoting>,
    /// Emit the record delimiter after the last record when writing.
    pub terminate_last_record: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            field_delimiter: ",".to_string(),
            record_delimiter: "\n".to_string(),
            quoting: None,
            terminate_last_record: false,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma-separated, LF records.
    pub fn csv() -> Self {
        Self::default()
    }

    /// Tab-separated, LF records.
    pub fn tsv() -> Self {
        Self::new().with_field_delimiter("\t")
    }

    /// Comma-separated, CRLF records.
    pub fn crlf() -> Self {
        Self::new().with_record_delimiter("\r\n")
    }

    /// Comma-separated with the host platform's line ending.
    pub fn platform() -> Self {
        if cfg!(windows) {
            Self::crlf()
        } else {
            Self::csv()
        }
    }

    #[must_use]
    pub fn with_field_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.field_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_record_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.record_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = Some(quoting);
        self
    }

    #[must_use]
    pub fn without_quoting(mut self) -> Self {
        self.quoting = None;
        self
    }

    #[must_use]
    pub fn with_terminate_last_record(mut self, terminate: bool) -> Self {
        self.terminate_last_record = terminate;
        self
    }

    /// Check that the delimiters can be tokenized unambiguously.
    ///
    /// - both delimiters are non-empty and differ
    /// - the quote character (if any) appears in neither delimiter
    /// - the backslash escape rule is not paired with a backslash quote
    /// - with quoting, the record delimiter cannot match at or inside a
    ///   written field delimiter, so quoted output always reads back
    pub fn validate(&self) -> Result<()> {
        if self.field_delimiter.is_empty() {
            return Err(ParseError::invalid_config(
                "field delimiter must not be empty",
            ));
        }
        if self.record_delimiter.is_empty() {
            return Err(ParseError::invalid_config(
                "record delimiter must not be empty",
            ));
        }
        if self.field_delimiter == self.record_delimiter {
            return Err(ParseError::invalid_config(format!(
                "field and record delimiters are both {:?}",
                self.field_delimiter
            )));
        }
        if let Some(quoting) = &self.quoting {
            if self.field_delimiter.contains(quoting.quote)
                || self.record_delimiter.contains(quoting.quote)
            {
                return Err(ParseError::invalid_config(format!(
                    "quote character {:?} appears in a delimiter",
                    quoting.quote
                )));
            }
            if quoting.escape == EscapeRule::Backslash && quoting.quote == '\\' {
                return Err(ParseError::invalid_config(
                    "backslash cannot be the quote character with backslash escapes",
                ));
            }
            if record_delimiter_overlaps(&self.field_delimiter, &self.record_delimiter) {
                return Err(ParseError::invalid_config(format!(
                    "record delimiter {:?} can match inside field delimiter {:?}",
                    self.record_delimiter, self.field_delimiter
                )));
            }
        }
        Ok(())
    }
}

/// Whether the record delimiter can match starting within a field delimiter,
/// given that only further delimiters may follow it directly. Quoted output
/// never puts a delimiter character in unquoted field text.
fn record_delimiter_overlaps(field: &str, record: &str) -> bool {
    field.char_indices().any(|(offset, _)| {
        let suffix = &field[offset..];
        match record.strip_prefix(suffix) {
            Some(tail) => starts_delimiter_run(tail, field, record),
            None => suffix.starts_with(record),
        }
    })
}

/// Whether `text` is a prefix of some run of consecutive delimiters.
fn starts_delimiter_run(text: &str, field: &str, record: &str) -> bool {
    if text.is_empty() || field.starts_with(text) || record.starts_with(text) {
        return true;
    }
    text.strip_prefix(field)
        .is_some_and(|rest| starts_delimiter_run(rest, field, record))
}
