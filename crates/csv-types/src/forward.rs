//! Forward conversion: TypedValue → CSV string.
//!
//! Produces the unquoted field text; quoting and escaping are left to the
//! writer configured from `TextFormat`.

use row_core::{Row, TypedValue};

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for CsvValue {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&TypedValue> for CsvValue {
    fn from(value: &TypedValue) -> Self {
        render_value(value)
    }
}

impl From<TypedValue> for CsvValue {
    fn from(value: TypedValue) -> Self {
        match value {
            TypedValue::VarChar(s) => CsvValue(s),
            other => render_value(&other),
        }
    }
}

/// Canonical string form of a value (see `TypedValue`'s `Display`).
pub fn render_value(value: &TypedValue) -> CsvValue {
    CsvValue(value.to_string())
}

/// Render every field of a row, in column order.
pub fn render_row(row: &Row) -> Vec<CsvValue> {
    row.iter().map(render_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use row_core::{ColumnType, Schema};
    use std::sync::Arc;

    #[test]
    fn test_int_conversion() {
        let csv_val: CsvValue = TypedValue::Integer(12345).into();
        assert_eq!(csv_val.as_str(), "12345");

        let csv_val: CsvValue = TypedValue::TinyInt(-3).into();
        assert_eq!(csv_val.as_str(), "-3");
    }

    #[test]
    fn test_bigint_conversion() {
        let csv_val = render_value(&TypedValue::BigInt(9876543210));
        assert_eq!(csv_val.into_inner(), "9876543210");
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(render_value(&TypedValue::Float(1.23)).as_str(), "1.23");
        assert_eq!(render_value(&TypedValue::Double(2.0)).as_str(), "2.0");
    }

    #[test]
    fn test_varchar_is_not_escaped() {
        let csv_val: CsvValue = TypedValue::varchar("say \"hi\", twice").into();
        assert_eq!(csv_val.as_str(), "say \"hi\", twice");
    }

    #[test]
    fn test_render_row() {
        let schema = Arc::new(Schema::from_types([
            ColumnType::Integer,
            ColumnType::VarChar,
            ColumnType::Double,
        ])
        .unwrap());
        let row = Row::new(
            schema,
            vec![
                TypedValue::Integer(42),
                TypedValue::varchar("a,b"),
                TypedValue::Double(0.5),
            ],
        )
        .unwrap();
        let rendered: Vec<String> = render_row(&row)
            .into_iter()
            .map(CsvValue::into_inner)
            .collect();
        assert_eq!(rendered, vec!["42", "a,b", "0.5"]);
    }
}
