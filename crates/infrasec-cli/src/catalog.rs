//! # Catalog Subcommand
//!
//! Prints the remediation catalog in effect: the built-in table with any
//! entries from the config file applied.

use anyhow::Result;
use clap::Args;

use crate::config::CliConfig;
use crate::OutputFormat;

/// Arguments for the catalog subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs, config: &CliConfig) -> Result<u8> {
    print!("{}", render_catalog(args, config)?);
    Ok(0)
}

/// Produce the text `run_catalog` prints.
pub fn render_catalog(args: &CatalogArgs, config: &CliConfig) -> Result<String> {
    let catalog = config.catalog();
    match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&catalog)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, remediation) in catalog.iter() {
                out.push_str(&format!("{name}\n    {remediation}\n"));
            }
            out.push_str(&format!("(fallback)\n    {}\n", catalog.fallback()));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_entries_and_fallback() {
        let text = render_catalog(
            &CatalogArgs {
                format: OutputFormat::Text,
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert!(text.contains("Backup Policy\n    "));
        assert!(text.ends_with("(fallback)\n    Review control implementation.\n"));
    }

    #[test]
    fn json_reflects_config_overrides() {
        let config = CliConfig::parse("remediations:\n  Firewall Rules: Monthly review.\n").unwrap();
        let json = render_catalog(
            &CatalogArgs {
                format: OutputFormat::Json,
            },
            &config,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"]["Firewall Rules"], "Monthly review.");
        assert_eq!(value["fallback"], "Review control implementation.");
    }
}
