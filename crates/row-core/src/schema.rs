//! Row schema definitions.
//!
//! A `Schema` is an ordered list of columns. Conversion is positional: the
//! column at index `i` declares the type of the field at index `i`. Column
//! names exist for diagnostics and for schema files.
//!
//! ## Sources
//!
//! - [`Schema::new`] / [`Schema::from_types`] - built in code
//! - [`Schema::from_str`](std::str::FromStr) - compact form, `id:integer,name:varchar`
//! - [`Schema::from_yaml_str`] / [`Schema::from_file`] - YAML schema files

use crate::types::{ColumnType, UnknownColumnType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Type name not recognized
    #[error(transparent)]
    UnknownType(#[from] UnknownColumnType),

    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Compact schema entry could not be split into name and type
    #[error("Invalid column entry: '{0}'")]
    InvalidEntry(String),

    /// Schema without columns
    #[error("Schema must declare at least one column")]
    Empty,
}

/// A single column: name plus declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Declared column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered column list describing a row's shape.
///
/// Immutable once built. Rows share it through `Arc<Schema>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnDefinition>,
}

/// On-disk layout of a schema file.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    columns: Vec<ColumnDefinition>,
}

impl Schema {
    /// Create a schema from column definitions.
    ///
    /// Fails on an empty column list or on duplicate names.
    pub fn new(columns: Vec<ColumnDefinition>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Create an anonymous schema; columns are named `column_0`, `column_1`, ...
    ///
    /// Fails with [`SchemaError::Empty`] when `types` yields nothing.
    pub fn from_types<I>(types: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = ColumnType>,
    {
        let columns = types
            .into_iter()
            .enumerate()
            .map(|(i, ty)| ColumnDefinition::new(format!("column_{i}"), ty))
            .collect();
        Self::new(columns)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = serde_yaml::from_str(yaml)?;
        Self::new(file.columns)
    }

    /// Load a schema from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnDefinition> {
        self.columns.get(index)
    }

    /// Declared type of the column at `index`.
    pub fn column_type(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).map(|c| c.column_type)
    }

    /// Declared types in column order.
    pub fn column_types(&self) -> impl Iterator<Item = ColumnType> + '_ {
        self.columns.iter().map(|c| c.column_type)
    }

    /// Position of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// Compact form: comma-separated `name:type` or bare `type` entries.
///
/// Bare entries are named `column_{i}` after their position.
impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut columns = Vec::new();
        for (i, entry) in s.split(',').enumerate() {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(SchemaError::InvalidEntry(entry.to_string()));
            }
            let column = match entry.split_once(':') {
                Some((name, ty)) => {
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(SchemaError::InvalidEntry(entry.to_string()));
                    }
                    ColumnDefinition::new(name, ty.parse()?)
                }
                None => ColumnDefinition::new(format!("column_{i}"), entry.parse()?),
            };
            columns.push(column);
        }
        Self::new(columns)
    }
}
