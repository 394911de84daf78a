// ==============================================================================
// genotype_table.rs - Mass Spectrometry SNP Genotyping Table Parser
// ==============================================================================
// Description: Parser for tab-delimited sample x marker genotype tables
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================
// Format: Tab-delimited text, CRLF line endings, one header line
// Example:
//   Primers    r1311895    r1406821    r145504    r17661    r2493899
//   MB128      A           C           G          CA        C
//   MB164      AG          C           G                    C
// Genotype codes:
//   ""  (missing)      -> 0 0
//   "G" (homozygous)   -> G G
//   "CA" (heterozygous) -> C A   (input order kept)
// ==============================================================================

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{AllelePair, GenotypeRecord, GenotypeTable, Header};

/// Line terminator of the genotyping export
pub const LINE_TERMINATOR: &str = "\r\n";

/// Field delimiter of the genotyping export
pub const FIELD_DELIMITER: char = '\t';

/// Errors that can occur while parsing a genotyping table
#[derive(Error, Debug)]
pub enum GenotypeTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Unexpected genotype '{genotype}' for sample {sample} at column {column} \
         (marker {marker}): expected 0, 1 or 2 characters"
    )]
    MalformedGenotype {
        sample: String,
        column: usize,
        marker: String,
        genotype: String,
    },

    #[error("Sample {sample} has {found} genotype fields but the header declares {expected} markers")]
    FieldCountMismatch {
        sample: String,
        expected: usize,
        found: usize,
    },
}

/// How the input blob is cut into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndings {
    /// Only the exact `\r\n` sequence ends a line
    #[default]
    Crlf,
    /// `\r\n` and bare `\n` both end a line
    Normalized,
}

/// Split a blob into lines
///
/// A terminator at the very end of the blob does not open an extra line;
/// blank lines anywhere else are kept. The trailing empty segment is dropped
/// on purpose: exports end with CRLF and it would otherwise become an empty
/// sample row.
pub fn split_lines(blob: &str, endings: LineEndings) -> Vec<&str> {
    let mut lines: Vec<&str> = match endings {
        LineEndings::Crlf => blob.split(LINE_TERMINATOR).collect(),
        LineEndings::Normalized => blob
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
    };

    if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

/// Parse the header line
///
/// The leading label column ("Primers") is dropped and the remaining fields
/// become marker names. An empty line yields a header with no markers.
pub fn parse_header(line: &str) -> Header {
    Header::new(
        line.split(FIELD_DELIMITER)
            .skip(1)
            .map(str::to_string)
            .collect(),
    )
}

/// Convert one genotype code to its allele pair
///
/// Returns `None` for codes longer than two characters.
pub fn parse_genotype(code: &str) -> Option<AllelePair> {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Some(AllelePair::missing()),
        (Some(allele), None, _) => Some(AllelePair::homozygous(allele)),
        (Some(first), Some(second), None) => Some(AllelePair::new(first, second)),
        _ => None,
    }
}

/// Parse one sample line against the shared header
pub fn parse_record(line: &str, header: &Arc<Header>) -> Result<GenotypeRecord, GenotypeTableError> {
    let mut fields = line.split(FIELD_DELIMITER);
    let sample_name = fields.next().unwrap_or_default().to_string();
    let genotypes: Vec<&str> = fields.collect();

    if genotypes.len() != header.marker_count() {
        return Err(GenotypeTableError::FieldCountMismatch {
            sample: sample_name,
            expected: header.marker_count(),
            found: genotypes.len(),
        });
    }

    let alleles = genotypes
        .iter()
        .zip(header.markers.iter())
        .enumerate()
        .map(|(index, (genotype, marker))| {
            parse_genotype(genotype).ok_or_else(|| GenotypeTableError::MalformedGenotype {
                sample: sample_name.clone(),
                column: index + 1,
                marker: marker.clone(),
                genotype: genotype.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenotypeRecord {
        sample_name,
        header: Arc::clone(header),
        alleles,
    })
}

/// Parse a whole genotyping table held in memory
///
/// Fails on the first malformed line; no partial table is returned.
pub fn parse_table(blob: &str, endings: LineEndings) -> Result<GenotypeTable, GenotypeTableError> {
    // split_lines always yields at least the header line
    let lines = split_lines(blob, endings);

    let header = Arc::new(parse_header(lines[0]));
    debug!("Header declares {} markers", header.marker_count());

    let records = lines[1..]
        .iter()
        .map(|line| parse_record(line, &header))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenotypeTable { header, records })
}

/// Read and parse a genotyping table file
pub fn read_table(path: impl AsRef<Path>, endings: LineEndings) -> Result<GenotypeTable, GenotypeTableError> {
    let path = path.as_ref();
    let blob = std::fs::read_to_string(path)?;
    info!("Read {} bytes from {:?}", blob.len(), path);

    parse_table(&blob, endings)
}
