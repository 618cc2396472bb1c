//! Record and table containers for delimited text data.
//!
//! A [`Table`] is an ordered sequence of [`Record`]s and a [`Record`] is an
//! ordered sequence of text fields. Nothing here performs I/O: the containers
//! are plain owned values produced by `csvtab-parser` or built by hand.
//!
//! # Example
//!
//! ```
//! use csvtab_model::{Record, Table};
//!
//! let table: Table = vec![
//!     Record::from(vec!["a".to_string(), "b".to_string()]),
//!     Record::from_iter(["c"]),
//! ]
//! .into();
//!
//! assert_eq!(table.num_records(), 2);
//! assert_eq!(table.field(0, 1).unwrap(), "b");
//! assert!(table.field(1, 1).is_err());
//! assert!(!table.is_uniform());
//! ```

mod error;
mod record;
mod table;

// === Error Types ===
pub use error::{ModelError, Result};

// === Containers ===
pub use record::Record;
pub use table::Table;
