//! Command implementations for the CLI.

/// Reads the catalog, probes every clip and writes the transition document.
pub mod generate;
