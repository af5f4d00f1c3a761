//! Line-level conversion between CSV text and `Row`.
//!
//! [`decode`] tokenizes one line with the `csv` reader and casts every field
//! in schema order; [`encode`] renders every value and hands the strings to
//! the `csv` writer. Both are pure: the format and schema are only read.

use row_core::{Row, Schema};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::error::CodecError;
use crate::format::TextFormat;
use crate::forward::render_value;
use crate::reverse::cast_field;

/// Decode one CSV line into a row bound to `schema`.
///
/// The field count must equal the schema length; a line with no record at all
/// counts as zero fields. If the text holds more than one record, only the
/// first is decoded. The first failing field aborts the whole row.
pub fn decode(format: &TextFormat, line: &str, schema: &Arc<Schema>) -> Result<Row, CodecError> {
    let mut reader = format.reader_builder().from_reader(line.as_bytes());
    let mut records = reader.records();

    let record = match records.next() {
        Some(record) => record?,
        None => {
            return Err(CodecError::ShapeMismatch {
                expected: schema.len(),
                actual: 0,
            })
        }
    };
    if records.next().is_some() {
        warn!("Line holds more than one CSV record, decoding only the first");
    }

    if record.len() != schema.len() {
        return Err(CodecError::ShapeMismatch {
            expected: schema.len(),
            actual: record.len(),
        });
    }
    debug!(fields = record.len(), "Decoding CSV line");

    let mut builder = Row::builder(Arc::clone(schema));
    for (index, (column_type, raw)) in schema.column_types().zip(record.iter()).enumerate() {
        trace!(index, %column_type, raw, "Casting field");
        let value = cast_field(column_type, raw).map_err(|e| e.at(index))?;
        builder.push(value)?;
    }
    Ok(builder.finish()?)
}

/// Encode a row as one CSV record, terminator included.
pub fn encode(row: &Row, format: &TextFormat) -> Result<String, CodecError> {
    debug!(fields = row.len(), "Encoding row");

    let mut writer = format.writer_builder().from_writer(Vec::new());
    writer.write_record(row.iter().map(render_value))?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// A validated format paired with the schema it decodes into.
///
/// Cheap to clone and safe to share across threads; every call allocates its
/// own row or string.
#[derive(Debug, Clone)]
pub struct RowCodec {
    format: TextFormat,
    schema: Arc<Schema>,
}

impl RowCodec {
    /// Create a codec; fails if `format` is ambiguous.
    pub fn new(format: TextFormat, schema: impl Into<Arc<Schema>>) -> Result<Self, CodecError> {
        format.validate()?;
        Ok(Self {
            format,
            schema: schema.into(),
        })
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn decode_line(&self, line: &str) -> Result<Row, CodecError> {
        decode(&self.format, line, &self.schema)
    }

    pub fn encode_row(&self, row: &Row) -> Result<String, CodecError> {
        encode(row, &self.format)
    }
}
