//! Error types for CSV row conversion.

use row_core::{ColumnType, RowError};
use thiserror::Error;

use crate::format::FormatError;
use crate::reverse::CastCause;

/// Errors that can occur while decoding or encoding a CSV line.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Tokenized field count differs from the schema length.
    #[error("Expected {expected} fields, but found {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A raw field is not a valid literal of its declared type.
    #[error("Column {index}: failed to parse '{raw}' as {column_type}: {cause}")]
    Cast {
        index: usize,
        column_type: ColumnType,
        raw: String,
        #[source]
        cause: CastCause,
    },

    /// The schema declares a type the codec has no parser for.
    #[error("Column {index}: column type {column_type} is not supported yet")]
    UnsupportedType {
        index: usize,
        column_type: ColumnType,
    },

    /// Row construction error.
    #[error(transparent)]
    Row(#[from] RowError),

    /// Format settings rejected.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Tokenizer or writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer produced bytes that are not UTF-8.
    #[error("Encoded line is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
