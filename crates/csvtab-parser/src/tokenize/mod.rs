//! Splitting raw text into records and fields.
//!
//! Two strategies share the same end-of-input rules:
//! - [`plain`]: literal substring splits, records first, then fields.
//! - [`quoted`]: a single scan that honours quoted sections.
//!
//! In both, empty input yields no records and a record delimiter at the very
//! end of the input does not start a new record.

pub(crate) mod plain;
pub(crate) mod quoted;

use csvtab_model::Table;

use crate::config::ParserConfig;
use crate::error::Result;

/// Tokenize `text` with an already validated configuration.
pub(crate) fn tokenize(text: &str, config: &ParserConfig) -> Result<Table> {
    match config.quoting {
        None => Ok(plain::split(
            text,
            &config.field_delimiter,
            &config.record_delimiter,
        )),
        Some(quoting) => quoted::scan(
            text,
            &config.field_delimiter,
            &config.record_delimiter,
            quoting,
        ),
    }
}
