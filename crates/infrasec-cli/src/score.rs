//! # Score Subcommand
//!
//! Reads a control table, scores it, and prints the readiness report.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Report printed |
//! | 1 | Input or argument error (reported by `main`) |
//! | 2 | The table has no rows |

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use infrasec_compliance::{build_report, read_controls, ComplianceError};
use infrasec_core::{AssessmentContext, ControlRecord, Requester};

use crate::config::CliConfig;
use crate::OutputFormat;

/// Exit code for an empty control table.
pub const EXIT_NO_DATA: u8 = 2;

/// Arguments for the score subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Control table (CSV). Use `-` to read from stdin.
    pub input: PathBuf,

    /// Standard the controls are measured against.
    #[arg(long)]
    pub standard: Option<String>,

    /// E-mail address of the person requesting the assessment.
    #[arg(long)]
    pub requester: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Result of scoring, before anything is printed.
#[derive(Debug)]
pub enum ScoreOutcome {
    /// Rendered report.
    Report(String),
    /// The table had a header but no rows.
    NoData,
}

/// Execute the score subcommand.
pub fn run_score(args: &ScoreArgs, config: &CliConfig) -> Result<u8> {
    match render_score(args, config)? {
        ScoreOutcome::Report(rendered) => {
            if let Some(out) = &args.out {
                std::fs::write(out, &rendered)
                    .with_context(|| format!("failed to write report: {}", out.display()))?;
                tracing::info!(path = %out.display(), "report written");
            }
            print!("{rendered}");
            Ok(0)
        }
        ScoreOutcome::NoData => {
            eprintln!("no data: {} contains no control rows", source_label(&args.input));
            Ok(EXIT_NO_DATA)
        }
    }
}

/// Read, score and render without printing.
pub fn render_score(args: &ScoreArgs, config: &CliConfig) -> Result<ScoreOutcome> {
    let mut context = AssessmentContext::new(source_label(&args.input));
    if let Some(standard) = args.standard.as_ref().or(config.standard.as_ref()) {
        context = context.with_standard(standard);
    }
    if let Some(requester) = &args.requester {
        context = context.with_requester(Requester::new(requester)?);
    }

    let records = read_input(&args.input)?;
    let catalog = config.catalog();

    let report = match build_report(context, &records, &catalog) {
        Ok(report) => report,
        Err(ComplianceError::NoData) => {
            tracing::warn!(source = %args.input.display(), "control table has no rows");
            return Ok(ScoreOutcome::NoData);
        }
        Err(e) => return Err(e).context("failed to score control table"),
    };

    let rendered = match args.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => {
            let mut json = report.to_json_pretty()?;
            json.push('\n');
            json
        }
    };
    Ok(ScoreOutcome::Report(rendered))
}

fn read_input(input: &Path) -> Result<Vec<ControlRecord>> {
    let label = source_label(input);
    if input == Path::new("-") {
        return read_input_from(std::io::stdin().lock(), &label);
    }
    let file = std::fs::File::open(input)
        .with_context(|| format!("failed to open control table: {label}"))?;
    read_input_from(file, &label)
}

/// Buffer `reader` fully and parse it as a control table named `label`.
fn read_input_from<R: Read>(mut reader: R, label: &str) -> Result<Vec<ControlRecord>> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .with_context(|| format!("failed to read control table: {label}"))?;
    read_controls(buf.as_slice()).with_context(|| format!("invalid control table: {label}"))
}

fn source_label(input: &Path) -> String {
    if input == Path::new("-") {
        "stdin".to_string()
    } else {
        input.display().to_string()
    }
}
