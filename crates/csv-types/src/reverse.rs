//! Reverse conversion: CSV string → TypedValue.
//!
//! [`cast_field`] is the single dispatch point from a declared `ColumnType`
//! to the primitive parser for that type. The match is exhaustive with no
//! wildcard arm, so a new `ColumnType` does not compile until it is either
//! given a parser here or listed as unsupported.

use row_core::{ColumnType, TypedValue};
use std::num::{ParseFloatError, ParseIntError};

use crate::error::CodecError;

/// Why a raw field did not parse as its declared primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastCause {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

/// Error type for a single field cast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// Raw text is not a valid literal of the declared type (or overflows it)
    #[error("Failed to parse '{raw}' as {column_type}: {cause}")]
    Invalid {
        column_type: ColumnType,
        raw: String,
        #[source]
        cause: CastCause,
    },

    /// The codec has no parser for this column type
    #[error("Column type {0} is not supported yet")]
    UnsupportedType(ColumnType),
}

impl CastError {
    /// Attach the column position the failed field came from.
    pub(crate) fn at(self, index: usize) -> CodecError {
        match self {
            Self::Invalid {
                column_type,
                raw,
                cause,
            } => CodecError::Cast {
                index,
                column_type,
                raw,
                cause,
            },
            Self::UnsupportedType(column_type) => CodecError::UnsupportedType { index, column_type },
        }
    }
}

/// Parse a raw CSV field as the declared column type.
///
/// Uses the native parser of the target primitive: no trimming, no widening,
/// no empty-as-null. A `FLOAT` column always yields `TypedValue::Float`, never
/// `Double`.
pub fn cast_field(column_type: ColumnType, raw: &str) -> Result<TypedValue, CastError> {
    let invalid = |cause: CastCause| CastError::Invalid {
        column_type,
        raw: raw.to_string(),
        cause,
    };

    match column_type {
        ColumnType::TinyInt => raw
            .parse::<i8>()
            .map(TypedValue::TinyInt)
            .map_err(|e| invalid(e.into())),
        ColumnType::SmallInt => raw
            .parse::<i16>()
            .map(TypedValue::SmallInt)
            .map_err(|e| invalid(e.into())),
        ColumnType::Integer => raw
            .parse::<i32>()
            .map(TypedValue::Integer)
            .map_err(|e| invalid(e.into())),
        ColumnType::BigInt => raw
            .parse::<i64>()
            .map(TypedValue::BigInt)
            .map_err(|e| invalid(e.into())),
        ColumnType::Float => raw
            .parse::<f32>()
            .map(TypedValue::Float)
            .map_err(|e| invalid(e.into())),
        ColumnType::Double => raw
            .parse::<f64>()
            .map(TypedValue::Double)
            .map_err(|e| invalid(e.into())),
        ColumnType::VarChar => Ok(TypedValue::VarChar(raw.to_string())),

        ColumnType::Boolean
        | ColumnType::Decimal
        | ColumnType::Char
        | ColumnType::Binary
        | ColumnType::VarBinary
        | ColumnType::Date
        | ColumnType::Time
        | ColumnType::Timestamp => Err(CastError::UnsupportedType(column_type)),
    }
}

/// Whether [`cast_field`] has a parser for `column_type`.
pub fn is_supported(column_type: ColumnType) -> bool {
    !matches!(
        cast_field(column_type, ""),
        Err(CastError::UnsupportedType(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::IntErrorKind;

    fn int_error_kind(err: CastError) -> IntErrorKind {
        match err {
            CastError::Invalid {
                cause: CastCause::Int(e),
                ..
            } => e.kind().clone(),
            other => panic!("Expected integer parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_tinyint() {
        assert_eq!(
            cast_field(ColumnType::TinyInt, "-128"),
            Ok(TypedValue::TinyInt(-128))
        );
        assert_eq!(
            cast_field(ColumnType::TinyInt, "127"),
            Ok(TypedValue::TinyInt(127))
        );
        let err = cast_field(ColumnType::TinyInt, "128").unwrap_err();
        assert_eq!(int_error_kind(err), IntErrorKind::PosOverflow);
    }

    #[test]
    fn test_smallint() {
        assert_eq!(
            cast_field(ColumnType::SmallInt, "-32768"),
            Ok(TypedValue::SmallInt(-32768))
        );
        let err = cast_field(ColumnType::SmallInt, "-32769").unwrap_err();
        assert_eq!(int_error_kind(err), IntErrorKind::NegOverflow);
    }

    #[test]
    fn test_integer() {
        assert_eq!(
            cast_field(ColumnType::Integer, "12345"),
            Ok(TypedValue::Integer(12345))
        );
        assert_eq!(
            cast_field(ColumnType::Integer, "+7"),
            Ok(TypedValue::Integer(7))
        );
        let err = cast_field(ColumnType::Integer, "2147483648").unwrap_err();
        assert_eq!(int_error_kind(err), IntErrorKind::PosOverflow);
    }

    #[test]
    fn test_bigint() {
        assert_eq!(
            cast_field(ColumnType::BigInt, "9876543210"),
            Ok(TypedValue::BigInt(9876543210))
        );
        let err = cast_field(ColumnType::BigInt, "9223372036854775808").unwrap_err();
        assert_eq!(int_error_kind(err), IntErrorKind::PosOverflow);
    }

    #[test]
    fn test_float_stays_32_bit() {
        let value = cast_field(ColumnType::Float, "1.5").unwrap();
        assert_eq!(value, TypedValue::Float(1.5));
        assert_eq!(value.column_type(), ColumnType::Float);
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn test_double() {
        assert_eq!(
            cast_field(ColumnType::Double, "1.23"),
            Ok(TypedValue::Double(1.23))
        );
        assert_eq!(
            cast_field(ColumnType::Double, "-4e10"),
            Ok(TypedValue::Double(-4e10))
        );
        assert_eq!(
            cast_field(ColumnType::Double, "42"),
            Ok(TypedValue::Double(42.0))
        );
    }

    #[test]
    fn test_varchar_never_fails() {
        for raw in ["", "hello world", "12", "a,b", " padded "] {
            assert_eq!(
                cast_field(ColumnType::VarChar, raw),
                Ok(TypedValue::varchar(raw))
            );
        }
    }

    #[test]
    fn test_invalid_literals_are_errors_not_defaults() {
        let numeric = [
            ColumnType::TinyInt,
            ColumnType::SmallInt,
            ColumnType::Integer,
            ColumnType::BigInt,
            ColumnType::Float,
            ColumnType::Double,
        ];
        for column_type in numeric {
            for raw in ["abc", "", " 1", "1 ", "1.0.0"] {
                let err = cast_field(column_type, raw).unwrap_err();
                match err {
                    CastError::Invalid {
                        column_type: ty,
                        raw: r,
                        ..
                    } => {
                        assert_eq!(ty, column_type);
                        assert_eq!(r, raw);
                    }
                    other => panic!("Expected Invalid for {column_type} {raw:?}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_integers_reject_decimal_literals() {
        assert!(cast_field(ColumnType::Integer, "1.0").is_err());
        assert!(cast_field(ColumnType::BigInt, "1e3").is_err());
    }

    #[test]
    fn test_unsupported_types_ignore_raw_text() {
        let unsupported = [
            ColumnType::Boolean,
            ColumnType::Decimal,
            ColumnType::Char,
            ColumnType::Binary,
            ColumnType::VarBinary,
            ColumnType::Date,
            ColumnType::Time,
            ColumnType::Timestamp,
        ];
        for column_type in unsupported {
            for raw in ["", "1", "2024-06-15", "true"] {
                assert_eq!(
                    cast_field(column_type, raw),
                    Err(CastError::UnsupportedType(column_type))
                );
            }
            assert!(!is_supported(column_type));
        }
    }

    #[test]
    fn test_supported_set() {
        let supported: Vec<_> = ColumnType::ALL
            .into_iter()
            .filter(|ty| is_supported(*ty))
            .collect();
        assert_eq!(
            supported,
            vec![
                ColumnType::TinyInt,
                ColumnType::SmallInt,
                ColumnType::Integer,
                ColumnType::BigInt,
                ColumnType::Float,
                ColumnType::Double,
                ColumnType::VarChar,
            ]
        );
    }

    #[test]
    fn test_error_message() {
        let err = cast_field(ColumnType::Double, "not_a_number").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse 'not_a_number' as DOUBLE: invalid float literal"
        );
        assert_eq!(
            CastError::UnsupportedType(ColumnType::Date).to_string(),
            "Column type DATE is not supported yet"
        );
    }
}
