// ==============================================================================
// output.rs - Wide-Format Table Output
// ==============================================================================
// Description: Render parsed genotype tables as two-column-per-marker output
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Each marker column becomes two allele columns:
//   SNPMarkers  r145504-A  r145504-B  r17661-A  r17661-B
//   MB164       G          G          0         0
// ==============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::models::{GenotypeRecord, GenotypeTable, Header};
use crate::parsers::{parse_table, GenotypeTableError, LineEndings};

/// Label written in the first column of the expanded header
pub const HEADER_LABEL: &str = "SNPMarkers";

/// Suffixes of the two allele columns generated per marker
pub const ALLELE_SUFFIXES: [&str; 2] = ["A", "B"];

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-delimited wide table (input for downstream analysis software)
    #[default]
    Tsv,
    /// JSON document with per-sample allele columns
    Json,
}

/// Render the expanded header line
pub fn render_header(header: &Header) -> String {
    let mut line = String::from(HEADER_LABEL);
    for marker in &header.markers {
        for suffix in ALLELE_SUFFIXES {
            line.push('\t');
            line.push_str(marker);
            line.push('-');
            line.push_str(suffix);
        }
    }
    line
}

/// Render one sample row, two allele fields per marker
pub fn render_record(record: &GenotypeRecord) -> String {
    let mut line = record.sample_name.clone();
    for pair in &record.alleles {
        line.push('\t');
        line.push(pair.first);
        line.push('\t');
        line.push(pair.second);
    }
    line
}

/// Render a parsed table as its header line and sample lines, in input order
pub fn render_table(table: &GenotypeTable) -> (String, Vec<String>) {
    (
        render_header(&table.header),
        table.records.iter().map(render_record).collect(),
    )
}

/// Parse a CRLF-delimited blob and render the wide table
///
/// Nothing is rendered if any line fails to parse.
pub fn transform(blob: &str) -> Result<(String, Vec<String>), GenotypeTableError> {
    let table = parse_table(blob, LineEndings::Crlf)?;
    Ok(render_table(&table))
}

/// Table document for JSON output
#[derive(Debug, Serialize)]
pub struct TableOutput {
    pub markers: Vec<String>,
    pub samples: Vec<SampleOutput>,
}

#[derive(Debug, Serialize)]
pub struct SampleOutput {
    pub sample: String,
    pub genotypes: Vec<GenotypeOutput>,
}

#[derive(Debug, Serialize)]
pub struct GenotypeOutput {
    pub marker: String,
    pub allele_a: char,
    pub allele_b: char,
}

impl From<&GenotypeTable> for TableOutput {
    fn from(table: &GenotypeTable) -> Self {
        Self {
            markers: table.header.markers.clone(),
            samples: table
                .records
                .iter()
                .map(|record| SampleOutput {
                    sample: record.sample_name.clone(),
                    genotypes: record
                        .calls()
                        .map(|(marker, pair)| GenotypeOutput {
                            marker: marker.to_string(),
                            allele_a: pair.first,
                            allele_b: pair.second,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Write a parsed table in the requested format
pub fn write_table<W: Write>(table: &GenotypeTable, format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            let (header, rows) = render_table(table);
            writeln!(writer, "{}", header).context("Failed to write header line")?;
            for row in &rows {
                writeln!(writer, "{}", row).context("Failed to write sample line")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &TableOutput::from(table))
                .context("Failed to write JSON output")?;
            writeln!(writer).context("Failed to write JSON output")?;
        }
    }

    writer.flush().context("Failed to flush output")?;

    info!(
        "{:?} output complete: {} samples, {} markers",
        format,
        table.records.len(),
        table.header.marker_count()
    );

    Ok(())
}
