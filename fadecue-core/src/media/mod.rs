//! Clip statistics extracted from probe reports.

pub mod stats;

pub use stats::{VideoStatistics, extract, statistics_from_report};
