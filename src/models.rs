// ==============================================================================
// models.rs - Genotype Table Data Models
// ==============================================================================
// Description: Marker header, allele pairs and per-sample genotype records
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

use std::sync::Arc;

/// Placeholder allele written for a missing genotype call
pub const MISSING_ALLELE: char = '0';

/// Marker names taken from the first line of the genotyping table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    /// Marker names in column order (uniqueness is not enforced)
    pub markers: Vec<String>,
}

impl Header {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Zygosity of a single genotype call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    Missing,
    Homozygous,
    Heterozygous,
}

/// The two alleles called for one sample at one marker
///
/// Zygosity is fixed when the pair is built from its genotype code, so a
/// one-character `"0"` call stays homozygous even though it renders like a
/// missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllelePair {
    pub first: char,
    pub second: char,
    zygosity: Zygosity,
}

impl AllelePair {
    /// Pair for a two-character genotype code
    pub fn new(first: char, second: char) -> Self {
        let zygosity = if first == second {
            Zygosity::Homozygous
        } else {
            Zygosity::Heterozygous
        };
        Self {
            first,
            second,
            zygosity,
        }
    }

    /// Pair used for an empty genotype field
    pub fn missing() -> Self {
        Self {
            first: MISSING_ALLELE,
            second: MISSING_ALLELE,
            zygosity: Zygosity::Missing,
        }
    }

    /// Pair used for a one-character genotype field
    pub fn homozygous(allele: char) -> Self {
        Self {
            first: allele,
            second: allele,
            zygosity: Zygosity::Homozygous,
        }
    }

    pub fn zygosity(&self) -> Zygosity {
        self.zygosity
    }
}

/// One sample row of the genotyping table
///
/// `alleles` is aligned positionally with `header.markers`; the parser
/// refuses to build a record where the two lengths differ.
#[derive(Debug, Clone, PartialEq)]
pub struct GenotypeRecord {
    pub sample_name: String,
    pub header: Arc<Header>,
    pub alleles: Vec<AllelePair>,
}

impl GenotypeRecord {
    /// Iterate over `(marker, alleles)` in header order
    pub fn calls(&self) -> impl Iterator<Item = (&str, &AllelePair)> {
        self.header
            .markers
            .iter()
            .map(String::as_str)
            .zip(self.alleles.iter())
    }
}

/// A fully parsed genotyping table
#[derive(Debug, Clone, PartialEq)]
pub struct GenotypeTable {
    pub header: Arc<Header>,
    pub records: Vec<GenotypeRecord>,
}

/// Call counts across a whole table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub samples: usize,
    pub markers: usize,
    pub missing: usize,
    pub homozygous: usize,
    pub heterozygous: usize,
}

impl GenotypeTable {
    pub fn summary(&self) -> TableSummary {
        let mut summary = TableSummary {
            samples: self.records.len(),
            markers: self.header.marker_count(),
            ..TableSummary::default()
        };

        for pair in self.records.iter().flat_map(|r| r.alleles.iter()) {
            match pair.zygosity() {
                Zygosity::Missing => summary.missing += 1,
                Zygosity::Homozygous => summary.homozygous += 1,
                Zygosity::Heterozygous => summary.heterozygous += 1,
            }
        }

        summary
    }
}
