//! # infrasec CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use infrasec_cli::advise::{run_advise, AdviseArgs};
use infrasec_cli::catalog::{run_catalog, CatalogArgs};
use infrasec_cli::config::CliConfig;
use infrasec_cli::score::{run_score, ScoreArgs};

/// infrasec: compliance readiness scoring and network infrastructure advice.
///
/// Scores a table of security controls, lists remediation suggestions for
/// every gap, and prints reference network designs.
#[derive(Parser, Debug)]
#[command(name = "infrasec", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a control table and print a readiness report.
    Score(ScoreArgs),

    /// Print network architecture guidance for an environment.
    Advise(AdviseArgs),

    /// Print the effective remediation catalog.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("infrasec CLI starting");

    match dispatch(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Run the selected subcommand. Only subcommands that use the config load it.
fn dispatch(cli: &Cli) -> anyhow::Result<u8> {
    let config = || CliConfig::load(cli.config.as_deref());
    match &cli.command {
        Commands::Score(args) => run_score(args, &config()?),
        Commands::Advise(args) => run_advise(args),
        Commands::Catalog(args) => run_catalog(args, &config()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrasec_cli::OutputFormat;

    #[test]
    fn cli_parse_score_minimal() {
        let cli = Cli::try_parse_from(["infrasec", "score", "controls.csv"]).unwrap();
        if let Commands::Score(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("controls.csv"));
            assert!(args.standard.is_none());
            assert!(args.requester.is_none());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.out.is_none());
        } else {
            panic!("expected score");
        }
    }

    #[test]
    fn cli_parse_score_with_all_options() {
        let cli = Cli::try_parse_from([
            "infrasec",
            "score",
            "-",
            "--standard",
            "NIST CSF",
            "--requester",
            "ops@example.com",
            "--format",
            "json",
            "--out",
            "report.json",
        ])
        .unwrap();
        if let Commands::Score(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
            assert_eq!(args.standard.as_deref(), Some("NIST CSF"));
            assert_eq!(args.requester.as_deref(), Some("ops@example.com"));
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.out, Some(PathBuf::from("report.json")));
        } else {
            panic!("expected score");
        }
    }

    #[test]
    fn cli_parse_score_requires_input() {
        assert!(Cli::try_parse_from(["infrasec", "score"]).is_err());
    }

    #[test]
    fn cli_parse_score_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["infrasec", "score", "x.csv", "--format", "pdf"]).is_err());
    }

    #[test]
    fn cli_parse_advise_environment() {
        let cli = Cli::try_parse_from(["infrasec", "advise", "small-office"]).unwrap();
        if let Commands::Advise(args) = cli.command {
            assert_eq!(args.environment.as_deref(), Some("small-office"));
            assert!(!args.list);
        } else {
            panic!("expected advise");
        }
    }

    #[test]
    fn cli_parse_advise_list() {
        let cli = Cli::try_parse_from(["infrasec", "advise", "--list"]).unwrap();
        if let Commands::Advise(args) = cli.command {
            assert!(args.list);
            assert!(args.environment.is_none());
        } else {
            panic!("expected advise");
        }
    }

    #[test]
    fn cli_parse_advise_needs_environment_or_list() {
        assert!(Cli::try_parse_from(["infrasec", "advise"]).is_err());
        assert!(Cli::try_parse_from(["infrasec", "advise", "small-office", "--list"]).is_err());
    }

    #[test]
    fn cli_parse_catalog() {
        let cli = Cli::try_parse_from(["infrasec", "catalog", "--format", "json"]).unwrap();
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected catalog");
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["infrasec", "catalog"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["infrasec", "-v", "catalog"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["infrasec", "-vvv", "catalog"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["infrasec", "catalog", "--config", "infrasec.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("infrasec.yaml")));
    }

    #[test]
    fn advise_ignores_unreadable_config() {
        let cli = Cli::try_parse_from([
            "infrasec",
            "--config",
            "/nonexistent/infrasec.yaml",
            "advise",
            "--list",
        ])
        .unwrap();
        assert_eq!(dispatch(&cli).unwrap(), 0);
    }

    #[test]
    fn catalog_reports_unreadable_config() {
        let cli = Cli::try_parse_from([
            "infrasec",
            "--config",
            "/nonexistent/infrasec.yaml",
            "catalog",
        ])
        .unwrap();
        let err = dispatch(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/infrasec.yaml"));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["infrasec"]).is_err());
        assert!(Cli::try_parse_from(["infrasec", "nonexistent"]).is_err());
    }
}
