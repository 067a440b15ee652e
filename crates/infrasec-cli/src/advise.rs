//! # Advise Subcommand
//!
//! Prints the fixed network architecture guidance for one environment, or
//! lists the environments that have guidance.

use anyhow::Result;
use clap::Args;

use infrasec_compliance::NetworkEnvironment;

/// Arguments for the advise subcommand.
#[derive(Args, Debug)]
pub struct AdviseArgs {
    /// Environment name or label (e.g. `small-office`, "Enterprise Campus Network").
    #[arg(required_unless_present = "list")]
    pub environment: Option<String>,

    /// List the available environments.
    #[arg(long, conflicts_with = "environment")]
    pub list: bool,
}

/// Execute the advise subcommand.
pub fn run_advise(args: &AdviseArgs) -> Result<u8> {
    print!("{}", render_advise(args)?);
    Ok(0)
}

/// Produce the text `run_advise` prints.
pub fn render_advise(args: &AdviseArgs) -> Result<String> {
    if args.list {
        let mut out = String::new();
        for env in NetworkEnvironment::all() {
            out.push_str(&format!("  {:<18} {}\n", env.slug(), env.label()));
        }
        return Ok(out);
    }

    let selection = args.environment.as_deref().unwrap_or_default();
    let env: NetworkEnvironment = selection.parse()?;
    tracing::debug!(environment = env.slug(), "rendering network guidance");
    Ok(env.guidance().to_markdown())
}
