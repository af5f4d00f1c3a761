//! CSV type conversions for row-core types.
//!
//! This crate converts between a single line of delimited text and a
//! schema-bound [`Row`](row_core::Row).
//!
//! # Modules
//!
//! - [`format`] - `TextFormat`: delimiter, quoting and terminator settings
//! - [`reverse`] - CSV string → TypedValue (the cast dispatch)
//! - [`forward`] - TypedValue → CSV string
//! - [`codec`] - whole-line `decode` / `encode` and `RowCodec`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use csv_types::{decode, encode, TextFormat};
//! use row_core::{ColumnType, Schema, TypedValue};
//!
//! let schema = Arc::new(Schema::from_types([ColumnType::Integer, ColumnType::VarChar]).unwrap());
//! let format = TextFormat::default();
//!
//! let row = decode(&format, "1,hello", &schema).unwrap();
//! assert_eq!(row.get(0), Some(&TypedValue::Integer(1)));
//!
//! let line = encode(&row, &format).unwrap();
//! assert_eq!(line, "1,hello\n");
//! ```

pub mod codec;
mod error;
pub mod format;
pub mod forward;
pub mod reverse;

pub use codec::{decode, encode, RowCodec};
pub use error::CodecError;
pub use format::{
    parse_format_char, FormatError, FormatPreset, QuoteStyle, RecordTerminator, TextFormat,
    TextFormatConfig,
};
pub use forward::{render_row, render_value, CsvValue};
pub use reverse::{cast_field, is_supported, CastCause, CastError};
