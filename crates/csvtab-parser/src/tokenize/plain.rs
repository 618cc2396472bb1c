//! Literal-substring tokenizer without quote handling.

use csvtab_model::{Record, Table};

/// Split `text` into records on `record_delimiter`, then each record into
/// fields on `field_delimiter`.
///
/// Both splits scan left to right for exact, non-overlapping matches. When the
/// record split ends with an empty chunk (the input ended with the delimiter,
/// or the input is empty) that chunk is dropped.
pub(crate) fn split(text: &str, field_delimiter: &str, record_delimiter: &str) -> Table {
    let mut chunks: Vec<&str> = text.split(record_delimiter).collect();
    if chunks.last().is_some_and(|chunk| chunk.is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .map(|chunk| chunk.split(field_delimiter).collect::<Record>())
        .collect()
}
