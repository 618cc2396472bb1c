//! Delimited text parsing and writing.
//!
//! This crate converts CSV-like text into a [`Table`] and back. Delimiters are
//! configurable and matched as exact substrings; quoted fields are opt-in.
//!
//! # Features
//!
//! - **Configurable delimiters**: any non-empty field and record delimiter
//!   (`,` / `\n` by default, multi-character allowed)
//! - **Exact matching**: `\n` never matches inside `\r\n` handling; a mismatch
//!   is visible in the fields rather than silently corrected
//! - **Trailing delimiter normalization**: a final record delimiter does not
//!   add an empty record
//! - **Quoting (opt-in)**: doubled-quote or backslash escapes
//! - **Injectable I/O and diagnostics**: [`Storage`] and [`DiagnosticSink`]
//!
//! # Example
//!
//! ```no_run
//! use csvtab_parser::{Parser, ParserConfig};
//!
//! let mut parser = Parser::with_config(ParserConfig::crlf());
//! parser.set_filename("test.csv");
//!
//! let table = parser.read_entire_file()?;
//! for record in &table {
//!     println!("{:?}", record.fields());
//! }
//! # Ok::<(), csvtab_parser::ParseError>(())
//! ```
//!
//! In-memory text goes through the same tokenizer:
//!
//! ```
//! use csvtab_parser::Parser;
//!
//! let table = Parser::new()
//!     .parse_str("element11,element12\nelement21,element22\n")
//!     .unwrap();
//! assert_eq!(table.num_records(), 2);
//! assert_eq!(table[1][0], "element21");
//! ```

mod config;
mod diagnostics;
mod error;
mod parser;
mod storage;
mod tokenize;
mod writer;

// === Error Types ===
pub use error::{ParseError, Result};

// === Configuration ===
pub use config::{EscapeRule, ParserConfig, Quoting};

// === Parser ===
pub use parser::Parser;

// === Collaborators ===
pub use diagnostics::{DiagnosticLevel, DiagnosticSink, NullSink, TracingSink, WriterSink};
pub use storage::{FsStorage, Storage};

// === Model Re-exports ===
pub use csvtab_model::{ModelError, Record, Table};
