//! Error types for record and table access.

use thiserror::Error;

/// Errors raised by indexed access into a [`Table`](crate::Table) or
/// [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Record index past the end of the table.
    #[error("record index {index} out of range (table has {len} records)")]
    RecordOutOfRange { index: usize, len: usize },

    /// Field index past the end of a record.
    #[error("field index {index} out of range (record has {len} fields)")]
    FieldOutOfRange { index: usize, len: usize },
}

impl ModelError {
    /// Whether this is an index-out-of-range failure.
    ///
    /// Every current variant is; the method lets callers match on the kind
    /// without listing variants.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RecordOutOfRange { .. } | Self::FieldOutOfRange { .. }
        )
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
