//! Command-line interface for csv-row-codec
//!
//! # Usage Examples
//!
//! ```bash
//! # Decode lines into JSON arrays using a compact column list
//! printf '1,hello\n2,world\n' | csv-row-codec decode --columns id:integer,name:varchar
//!
//! # Re-encode a tab-separated file in canonical form, dropping bad lines
//! csv-row-codec normalize --config codec.yaml --format tdf \
//!   --input data.tsv --skip-invalid
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use csv_row_codec::{process_lines, CodecOpts, OutputMode};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-row-codec")]
#[command(about = "Decode and re-encode CSV lines against a typed column schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode each line and print the row as a JSON array
    Decode {
        #[command(flatten)]
        codec: CodecOpts,

        #[command(flatten)]
        io: IoOpts,
    },
    /// Decode each line and write it back in canonical form
    Normalize {
        #[command(flatten)]
        codec: CodecOpts,

        #[command(flatten)]
        io: IoOpts,
    },
}

#[derive(Args)]
struct IoOpts {
    /// Input file (default: stdin)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Log and skip lines that fail to decode instead of stopping
    #[arg(long)]
    skip_invalid: bool,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (codec_opts, io_opts, mode) = match cli.command {
        Commands::Decode { codec, io } => (codec, io, OutputMode::Json),
        Commands::Normalize { codec, io } => (codec, io, OutputMode::Csv),
    };

    let codec = codec_opts.resolve()?;

    let input: Box<dyn BufRead> = match &io_opts.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {path:?}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let output = BufWriter::new(io::stdout().lock());

    process_lines(&codec, input, output, mode, io_opts.skip_invalid)?;
    Ok(())
}
