// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for genotyping table file formats
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

pub mod genotype_table;

pub use genotype_table::{
    parse_header, parse_record, parse_table, read_table, GenotypeTableError, LineEndings,
};
