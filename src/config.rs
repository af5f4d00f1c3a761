//! Codec configuration: YAML config files and command-line options.
//!
//! A config file carries both halves of a codec, the text format and the
//! column list:
//!
//! ```yaml
//! format:
//!   preset: rfc4180
//!   delimiter: ";"
//! columns:
//!   - name: id
//!     type: integer
//!   - name: title
//!     type: varchar
//! ```

use anyhow::{Context, Result};
use clap::Args;
use csv_types::{parse_format_char, FormatPreset, RowCodec, TextFormat};
use row_core::{ColumnDefinition, Schema};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of a codec config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Text format; defaults to comma separated with necessary quoting
    #[serde(default)]
    pub format: TextFormat,

    /// Columns in field order
    pub columns: Vec<ColumnDefinition>,
}

impl CodecConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse codec config")
    }

    /// Load a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read codec config from {path:?}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid codec config {path:?}"))
    }

    /// Build the schema declared by `columns`.
    pub fn schema(&self) -> Result<Schema> {
        Schema::new(self.columns.clone()).context("Invalid column list")
    }

    pub fn into_codec(self) -> Result<RowCodec> {
        let schema = self.schema()?;
        Ok(RowCodec::new(self.format, schema)?)
    }
}

/// Codec options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CodecOpts {
    /// YAML config file declaring `format` and `columns`
    #[arg(long, value_name = "FILE", conflicts_with = "columns")]
    pub config: Option<PathBuf>,

    /// Compact column list, e.g. `id:integer,name:varchar`
    #[arg(long, value_name = "COLUMNS", required_unless_present = "config")]
    pub columns: Option<String>,

    /// Format preset: default, rfc4180 or tdf (replaces the config file's format)
    #[arg(long, value_name = "PRESET")]
    pub format: Option<FormatPreset>,

    /// Field delimiter override (single character, `\t` for tab)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Quote character override
    #[arg(long)]
    pub quote: Option<String>,
}

impl CodecOpts {
    /// Resolve options into a validated codec.
    ///
    /// Precedence: explicit `--delimiter`/`--quote`, then `--format`, then the
    /// config file's format, then the default format.
    pub fn resolve(&self) -> Result<RowCodec> {
        let (mut format, schema) = match (&self.config, &self.columns) {
            (Some(path), _) => {
                let config = CodecConfig::from_file(path)?;
                let schema = config.schema()?;
                (config.format, schema)
            }
            (None, Some(columns)) => {
                let schema: Schema = columns
                    .parse()
                    .with_context(|| format!("Invalid --columns {columns:?}"))?;
                (TextFormat::default(), schema)
            }
            (None, None) => anyhow::bail!("Either --config or --columns is required"),
        };

        if let Some(preset) = self.format {
            format = preset.format();
        }
        if let Some(delimiter) = &self.delimiter {
            format.delimiter = parse_format_char("delimiter", delimiter)?;
        }
        if let Some(quote) = &self.quote {
            format.quote = parse_format_char("quote", quote)?;
        }

        debug!(columns = schema.len(), ?format, "Resolved codec");
        RowCodec::new(format, schema).context("Invalid text format")
    }
}
