//! csv-row-codec: schema-bound conversion between CSV lines and typed rows.
//!
//! The conversion itself lives in the workspace crates and is re-exported
//! here:
//!
//! - [`row_core`] - column types, schemas, typed values and rows
//! - [`csv_types`] - `TextFormat`, field casting, line `decode` / `encode`
//!
//! This crate adds config-file loading and the line driver behind the
//! `csv-row-codec` binary.

pub mod config;
pub mod run;

pub use config::{CodecConfig, CodecOpts};
pub use run::{process_lines, OutputMode, Summary};

pub use csv_types;
pub use row_core;
