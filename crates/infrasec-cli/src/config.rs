//! # Configuration File
//!
//! Optional YAML file passed with `--config`. Every key is optional;
//! unknown keys are rejected so typos surface immediately.
//!
//! ```yaml
//! standard: NIST CSF
//! fallback_remediation: Ask the security team for a remediation plan.
//! remediations:
//!   Backup Policy: Use immutable offsite backups.
//!   Firewall Rules: Review firewall rules monthly.
//! ```
//!
//! Command-line flags take precedence over values from this file.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use infrasec_compliance::RemediationCatalog;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default standard name for `score`.
    pub standard: Option<String>,
    /// Replacement for the generic remediation message.
    pub fallback_remediation: Option<String>,
    /// Extra or overriding catalog entries, keyed by control name.
    pub remediations: BTreeMap<String, String>,
}

impl CliConfig {
    /// Load the file at `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            remediations = config.remediations.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse YAML text. An empty document yields defaults.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Built-in catalog with this file's entries and fallback applied.
    pub fn catalog(&self) -> RemediationCatalog {
        let catalog = RemediationCatalog::default().with_entries(&self.remediations);
        match &self.fallback_remediation {
            Some(fallback) => catalog.with_fallback(fallback.as_str()),
            None => catalog,
        }
    }
}
