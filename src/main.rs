// ==============================================================================
// main.rs - SNP Tabulator Entry Point
// ==============================================================================
// Description: Convert a mass spectrometry SNP genotyping table to the
//              two-columns-per-marker layout expected by analysis software
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snp_tabulator::output::{self, OutputFormat};
use snp_tabulator::parsers::{self, LineEndings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tab-delimited genotyping table to convert
    #[arg(short, long = "in", value_name = "PATH")]
    input: PathBuf,

    /// Write the table to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Accept bare LF line endings as well as CRLF
    #[arg(long)]
    normalize_line_endings: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the table
    let default_filter = if args.verbose {
        "snp_tabulator=debug"
    } else {
        "snp_tabulator=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Arguments: {:?}", args);

    let endings = if args.normalize_line_endings {
        LineEndings::Normalized
    } else {
        LineEndings::Crlf
    };

    let table = parsers::read_table(&args.input, endings)
        .with_context(|| format!("Failed to convert {:?}", args.input))?;

    let summary = table.summary();
    info!(
        "Parsed {} samples x {} markers ({} missing, {} homozygous, {} heterozygous calls)",
        summary.samples,
        summary.markers,
        summary.missing,
        summary.homozygous,
        summary.heterozygous
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            output::write_table(&table, args.format, BufWriter::new(file))?;
            info!("Wrote {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            output::write_table(&table, args.format, BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}
