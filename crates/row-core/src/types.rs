//! Column type tags.
//!
//! This module defines `ColumnType`, the closed set of SQL type tags a schema
//! may declare. Which of these tags a given text format can actually cast is
//! decided by the conversion crates, not here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// SQL column type tag.
///
/// Every tag has a canonical upper-case SQL name (`INTEGER`, `VARCHAR`, ...)
/// used by `Display` and serialization.
///
/// # YAML Format
///
/// Tags are written as plain strings, case-insensitive:
/// ```yaml
/// type: integer
/// type: VARCHAR
/// type: bigint
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Boolean value
    Boolean,

    /// 8-bit signed integer
    TinyInt,

    /// 16-bit signed integer
    SmallInt,

    /// 32-bit signed integer
    Integer,

    /// 64-bit signed integer
    BigInt,

    /// Exact decimal
    Decimal,

    /// 32-bit IEEE 754 floating point
    Float,

    /// 64-bit IEEE 754 floating point
    Double,

    /// Fixed-length character string
    Char,

    /// Variable-length character string
    VarChar,

    /// Fixed-length binary string
    Binary,

    /// Variable-length binary string
    VarBinary,

    /// Date only (YYYY-MM-DD)
    Date,

    /// Time only (HH:MM:SS)
    Time,

    /// Timestamp without timezone
    Timestamp,
}

impl ColumnType {
    /// All tags, in declaration order.
    pub const ALL: [ColumnType; 15] = [
        ColumnType::Boolean,
        ColumnType::TinyInt,
        ColumnType::SmallInt,
        ColumnType::Integer,
        ColumnType::BigInt,
        ColumnType::Decimal,
        ColumnType::Float,
        ColumnType::Double,
        ColumnType::Char,
        ColumnType::VarChar,
        ColumnType::Binary,
        ColumnType::VarBinary,
        ColumnType::Date,
        ColumnType::Time,
        ColumnType::Timestamp,
    ];

    /// Canonical SQL name of the tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Char => "CHAR",
            Self::VarChar => "VARCHAR",
            Self::Binary => "BINARY",
            Self::VarBinary => "VARBINARY",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a type name does not match any `ColumnType`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column type: {0}")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Ok(Self::Boolean),
            "tinyint" => Ok(Self::TinyInt),
            "smallint" => Ok(Self::SmallInt),
            "integer" | "int" => Ok(Self::Integer),
            "bigint" => Ok(Self::BigInt),
            "decimal" | "numeric" => Ok(Self::Decimal),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "char" => Ok(Self::Char),
            "varchar" => Ok(Self::VarChar),
            "binary" => Ok(Self::Binary),
            "varbinary" => Ok(Self::VarBinary),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "timestamp" => Ok(Self::Timestamp),
            _ => Err(UnknownColumnType(s.to_string())),
        }
    }
}

impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct ColumnTypeVisitor;

        impl Visitor<'_> for ColumnTypeVisitor {
            type Value = ColumnType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a SQL column type name such as \"integer\" or \"varchar\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColumnTypeVisitor)
    }
}
