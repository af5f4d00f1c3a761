//! Core types for csv-row-codec.
//!
//! This crate provides the schema-bound row model shared by the text
//! conversion crates:
//!
//! - [`ColumnType`] - SQL column type tags
//! - [`Schema`] - ordered column definitions, loadable from YAML
//! - [`TypedValue`] - a single primitive field value
//! - [`Row`] / [`RowBuilder`] - values aligned 1:1 with a shared schema
//!
//! # Architecture
//!
//! ```text
//! row-core (this crate)
//!    │
//!    └─── csv-types   (CSV line ⇄ Row, field cast dispatch)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use row_core::{ColumnType, Row, Schema, TypedValue};
//!
//! let schema = Arc::new(Schema::from_types([ColumnType::Integer, ColumnType::VarChar]).unwrap());
//! let row = Row::new(schema, vec![TypedValue::Integer(1), TypedValue::varchar("hello")]).unwrap();
//! assert_eq!(row.len(), 2);
//! ```

pub mod row;
pub mod schema;
pub mod types;
pub mod values;

pub use row::{Row, RowBuilder, RowError};
pub use schema::{ColumnDefinition, Schema, SchemaError};
pub use types::{ColumnType, UnknownColumnType};
pub use values::TypedValue;
