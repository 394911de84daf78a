// ==============================================================================
// lib.rs - SNP Tabulator Library
// ==============================================================================
// Description: Library interface for genotyping table conversion modules
// Created: 2026-10-16
// Modified: 2026-10-16
// Version: 1.0.0
// ==============================================================================

pub mod models;
pub mod parsers;
pub mod output;
