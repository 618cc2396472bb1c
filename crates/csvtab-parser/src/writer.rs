//! Serializing a table back to delimited text.

use csvtab_model::{Record, Table};

use crate::config::{EscapeRule, ParserConfig, Quoting};
use crate::diagnostics::{DiagnosticLevel, DiagnosticSink};

/// Join fields with the field delimiter and records with the record
/// delimiter, using an already validated configuration.
///
/// With quoting enabled, fields that would not survive a re-read are quoted.
/// Without it, such fields are written verbatim and reported to `sink`.
pub(crate) fn serialize(
    table: &Table,
    config: &ParserConfig,
    sink: &dyn DiagnosticSink,
) -> String {
    let mut out = String::new();

    for (record_idx, record) in table.iter().enumerate() {
        if record_idx > 0 {
            out.push_str(&config.record_delimiter);
        }
        match config.quoting {
            Some(quoting) => write_quoted_record(&mut out, record, config, quoting),
            None => write_plain_record(&mut out, record_idx, record, config, sink),
        }
    }

    if config.terminate_last_record && !table.is_empty() {
        out.push_str(&config.record_delimiter);
    }
    out
}

fn write_plain_record(
    out: &mut String,
    record_idx: usize,
    record: &Record,
    config: &ParserConfig,
    sink: &dyn DiagnosticSink,
) {
    for (field_idx, field) in record.iter().enumerate() {
        if field_idx > 0 {
            out.push_str(&config.field_delimiter);
        }
        if contains_delimiter(field, config) {
            sink.emit(
                DiagnosticLevel::Warn,
                &format!(
                    "field [{record_idx}][{field_idx}] contains a delimiter and will not read back unchanged"
                ),
            );
        }
        out.push_str(field);
    }
}

fn write_quoted_record(
    out: &mut String,
    record: &Record,
    config: &ParserConfig,
    quoting: Quoting,
) {
    // A lone empty field is quoted so the record is not read back as absent.
    if record.num_fields() == 1 && record.get(0) == Some("") {
        out.push(quoting.quote);
        out.push(quoting.quote);
        return;
    }

    for (field_idx, field) in record.iter().enumerate() {
        if field_idx > 0 {
            out.push_str(&config.field_delimiter);
        }
        if needs_quoting(field, config, quoting.quote) {
            push_quoted(out, field, quoting);
        } else {
            out.push_str(field);
        }
    }
}

fn push_quoted(out: &mut String, field: &str, quoting: Quoting) {
    let quote = quoting.quote;
    out.push(quote);
    for ch in field.chars() {
        match quoting.escape {
            EscapeRule::Doubled if ch == quote => {
                out.push(quote);
                out.push(quote);
            }
            EscapeRule::Backslash if ch == quote || ch == '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push(quote);
}

fn contains_delimiter(field: &str, config: &ParserConfig) -> bool {
    field.contains(config.field_delimiter.as_str())
        || field.contains(config.record_delimiter.as_str())
}

/// A field is quoted when it holds the quote or any character of either
/// delimiter. Unquoted text then cannot start a delimiter match, even one that
/// runs on into the delimiter written after it.
fn needs_quoting(field: &str, config: &ParserConfig, quote: char) -> bool {
    field.chars().any(|ch| {
        ch == quote || config.field_delimiter.contains(ch) || config.record_delimiter.contains(ch)
    })
}
