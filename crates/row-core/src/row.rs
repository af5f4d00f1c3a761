//! Schema-bound rows.

use crate::schema::Schema;
use crate::types::ColumnType;
use crate::values::TypedValue;
use std::sync::Arc;

/// Error type for row construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    /// Value variant does not match the declared column type
    #[error("Column {index} is declared {expected}, got a {actual} value")]
    TypeMismatch {
        index: usize,
        expected: ColumnType,
        actual: ColumnType,
    },

    /// More values pushed than the schema has columns
    #[error("Row already holds all {capacity} columns")]
    TooManyValues { capacity: usize },

    /// Row finished before every column was populated
    #[error("Row is incomplete: expected {expected} values, got {actual}")]
    Incomplete { expected: usize, actual: usize },
}

/// One record: a shared schema plus one value per column.
///
/// Rows are only built through [`RowBuilder`], so `values.len() == schema.len()`
/// and every value's variant matches its column type.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    schema: Arc<Schema>,
    values: Vec<TypedValue>,
}

impl Row {
    /// Start building a row for `schema`.
    pub fn builder(schema: Arc<Schema>) -> RowBuilder {
        let capacity = schema.len();
        RowBuilder {
            schema,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build a row from a complete list of values.
    pub fn new(schema: Arc<Schema>, values: Vec<TypedValue>) -> Result<Self, RowError> {
        let mut builder = Self::builder(schema);
        for value in values {
            builder.push(value)?;
        }
        builder.finish()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn values(&self) -> &[TypedValue] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&TypedValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedValue> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<TypedValue> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a TypedValue;
    type IntoIter = std::slice::Iter<'a, TypedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Incremental, left-to-right row construction.
///
/// Dropping a builder discards whatever was pushed so far.
#[derive(Debug)]
pub struct RowBuilder {
    schema: Arc<Schema>,
    values: Vec<TypedValue>,
}

impl RowBuilder {
    /// Append the value for the next column.
    pub fn push(&mut self, value: TypedValue) -> Result<(), RowError> {
        let index = self.values.len();
        let expected = self
            .schema
            .column_type(index)
            .ok_or(RowError::TooManyValues {
                capacity: self.schema.len(),
            })?;
        let actual = value.column_type();
        if actual != expected {
            return Err(RowError::TypeMismatch {
                index,
                expected,
                actual,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Number of columns populated so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Freeze into a `Row`; every column must be populated.
    pub fn finish(self) -> Result<Row, RowError> {
        if self.values.len() != self.schema.len() {
            return Err(RowError::Incomplete {
                expected: self.schema.len(),
                actual: self.values.len(),
            });
        }
        Ok(Row {
            schema: self.schema,
            values: self.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::from_types([ColumnType::Integer, ColumnType::VarChar]).unwrap())
    }

    #[test]
    fn test_build_complete_row() {
        let row = Row::new(
            schema(),
            vec![TypedValue::Integer(1), TypedValue::varchar("hello")],
        )
        .unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(&TypedValue::Integer(1)));
        assert_eq!(row.get(1).and_then(|v| v.as_str()), Some("hello"));
        assert_eq!(row.get(2), None);
    }

    #[test]
    fn test_push_rejects_wrong_variant() {
        let mut builder = Row::builder(schema());
        let err = builder.push(TypedValue::BigInt(1)).unwrap_err();
        assert_eq!(
            err,
            RowError::TypeMismatch {
                index: 0,
                expected: ColumnType::Integer,
                actual: ColumnType::BigInt,
            }
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn test_push_rejects_overflow() {
        let mut builder = Row::builder(schema());
        builder.push(TypedValue::Integer(1)).unwrap();
        builder.push(TypedValue::varchar("a")).unwrap();
        let err = builder.push(TypedValue::varchar("b")).unwrap_err();
        assert_eq!(err, RowError::TooManyValues { capacity: 2 });
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_finish_rejects_partial_row() {
        let mut builder = Row::builder(schema());
        builder.push(TypedValue::Integer(1)).unwrap();
        let err = builder.finish().unwrap_err();
        assert_eq!(
            err,
            RowError::Incomplete {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_rows_share_schema() {
        let schema = schema();
        let a = Row::new(
            schema.clone(),
            vec![TypedValue::Integer(1), TypedValue::varchar("x")],
        )
        .unwrap();
        let b = Row::new(
            schema.clone(),
            vec![TypedValue::Integer(1), TypedValue::varchar("x")],
        )
        .unwrap();
        assert!(Arc::ptr_eq(a.schema(), &schema));
        assert_eq!(a, b);
        assert_eq!(Arc::strong_count(&schema), 3);
    }

    #[test]
    fn test_iterate_in_column_order() {
        let row = Row::new(
            schema(),
            vec![TypedValue::Integer(7), TypedValue::varchar("seven")],
        )
        .unwrap();
        let rendered: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["7", "seven"]);
        assert_eq!(row.into_values().len(), 2);
    }
}
