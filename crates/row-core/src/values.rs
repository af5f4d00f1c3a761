//! Typed field values.
//!
//! `TypedValue` is the value half of a row: one primitive per column, with the
//! variant fixed by the column's declared `ColumnType`.

use crate::types::ColumnType;
use serde::Serialize;
use std::fmt;

/// A single field value.
///
/// Exactly one primitive kind is active. The variant always corresponds to a
/// `ColumnType` (see [`TypedValue::column_type`]); rows only accept a value
/// whose variant matches the schema at that position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// 8-bit signed integer (`TINYINT`)
    TinyInt(i8),

    /// 16-bit signed integer (`SMALLINT`)
    SmallInt(i16),

    /// 32-bit signed integer (`INTEGER`)
    Integer(i32),

    /// 64-bit signed integer (`BIGINT`)
    BigInt(i64),

    /// 32-bit float (`FLOAT`)
    Float(f32),

    /// 64-bit float (`DOUBLE`)
    Double(f64),

    /// UTF-8 string (`VARCHAR`)
    VarChar(String),
}

impl TypedValue {
    /// Create a varchar value.
    pub fn varchar(value: impl Into<String>) -> Self {
        Self::VarChar(value.into())
    }

    /// The column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::TinyInt(_) => ColumnType::TinyInt,
            Self::SmallInt(_) => ColumnType::SmallInt,
            Self::Integer(_) => ColumnType::Integer,
            Self::BigInt(_) => ColumnType::BigInt,
            Self::Float(_) => ColumnType::Float,
            Self::Double(_) => ColumnType::Double,
            Self::VarChar(_) => ColumnType::VarChar,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Self::TinyInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Self::SmallInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::VarChar(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical text rendering.
///
/// Integers are base 10. Floats use the shortest representation that parses
/// back to the same bits, always with a decimal point or exponent (`1.0`,
/// `1e-7`, `inf`, `NaN`). Strings are written verbatim.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TinyInt(v) => write!(f, "{v}"),
            Self::SmallInt(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::VarChar(s) => f.write_str(s),
        }
    }
}
