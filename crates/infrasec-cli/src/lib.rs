//! # infrasec-cli — Command-Line Interface
//!
//! Provides the `infrasec` command. Argument parsing and output live here;
//! scoring, lookup and guidance live in `infrasec-compliance`.
//!
//! ## Subcommands
//!
//! - `infrasec score` — Score a control table and print a readiness report.
//! - `infrasec advise` — Print network architecture guidance.
//! - `infrasec catalog` — Print the effective remediation catalog.
//!
//! ```bash
//! infrasec score controls.csv --standard "NIST CSF" --format json
//! infrasec advise small-office
//! infrasec --config infrasec.yaml catalog
//! ```

pub mod advise;
pub mod catalog;
pub mod config;
pub mod score;

use clap::ValueEnum;

/// Output format shared by subcommands that print structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
