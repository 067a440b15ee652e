//! # Gap Recommendations
//!
//! Maps every control that is not fully compliant to a remediation
//! suggestion taken from a static catalog keyed by control name.
//!
//! ## Lookup Rules
//!
//! - Keys are matched exactly against the trimmed control name.
//! - Unknown names get the catalog's fallback text. This is not an error.
//! - Compliant controls never produce an entry.
//! - Entries keep input order. A control name seen twice keeps its first
//!   position.

use std::collections::{BTreeMap, HashSet};

use infrasec_core::ControlRecord;
use serde::{Deserialize, Serialize};

/// Suggestion used when a control name is not in the catalog.
pub const FALLBACK_REMEDIATION: &str = "Review control implementation.";

const BUILTIN_REMEDIATIONS: &[(&str, &str)] = &[
    (
        "Access Control",
        "Enforce least-privilege access and review user permissions quarterly.",
    ),
    (
        "Backup Policy",
        "Document a backup policy and test restores on a fixed schedule.",
    ),
    (
        "Encryption at Rest",
        "Encrypt stored data with managed keys and rotate keys annually.",
    ),
    (
        "Incident Response Plan",
        "Write an incident response plan with named owners and rehearse it yearly.",
    ),
    (
        "Logging and Monitoring",
        "Centralize security logs and alert on authentication and privilege events.",
    ),
    (
        "Multi-Factor Authentication",
        "Require MFA for remote access, administrators, and cloud consoles.",
    ),
    (
        "Network Segmentation",
        "Separate user, server, and management networks with VLANs and firewall rules.",
    ),
    (
        "Patch Management",
        "Apply critical patches within 14 days and track exceptions.",
    ),
    (
        "Security Awareness Training",
        "Run onboarding and annual security awareness training with phishing exercises.",
    ),
    (
        "Vulnerability Management",
        "Scan assets monthly and remediate high-severity findings within 30 days.",
    ),
];

/// Static control-name → remediation table plus a fallback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationCatalog {
    entries: BTreeMap<String, String>,
    fallback: String,
}

impl Default for RemediationCatalog {
    /// The built-in catalog.
    fn default() -> Self {
        Self {
            entries: BUILTIN_REMEDIATIONS
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
            fallback: FALLBACK_REMEDIATION.to_string(),
        }
    }
}

impl RemediationCatalog {
    /// A catalog with no entries; every lookup returns the fallback.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: FALLBACK_REMEDIATION.to_string(),
        }
    }

    /// Add or replace entries. Blank names are skipped.
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, text) in entries {
            let name = name.as_ref().trim();
            if name.is_empty() {
                tracing::warn!("skipping remediation entry with blank control name");
                continue;
            }
            self.entries.insert(name.to_string(), text.into());
        }
        self
    }

    /// Replace the fallback message. Blank text keeps the current one.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        if !fallback.trim().is_empty() {
            self.fallback = fallback;
        }
        self
    }

    /// Remediation text for `control_name`, or `None` if not catalogued.
    pub fn get(&self, control_name: &str) -> Option<&str> {
        self.entries.get(control_name.trim()).map(String::as_str)
    }

    /// Remediation text for `control_name`, falling back when not catalogued.
    pub fn lookup(&self, control_name: &str) -> &str {
        self.get(control_name).unwrap_or(self.fallback.as_str())
    }

    /// The fallback message.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Catalogued entries, sorted by control name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of catalogued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single gap and its suggested remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Control name as it appeared in the input.
    pub control_name: String,
    /// Suggested remediation.
    pub remediation: String,
}

/// Ordered control-name → remediation mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationMap {
    entries: Vec<Recommendation>,
}

impl RecommendationMap {
    /// Remediation for `control_name`, if it is a gap.
    pub fn get(&self, control_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.control_name == control_name)
            .map(|r| r.remediation.as_str())
    }

    /// Whether `control_name` has an entry.
    pub fn contains(&self, control_name: &str) -> bool {
        self.get(control_name).is_some()
    }

    /// Entries in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no gaps.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecommendationMap {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Map every non-compliant record to its remediation.
pub fn recommend(records: &[ControlRecord], catalog: &RemediationCatalog) -> RecommendationMap {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for record in records.iter().filter(|r| r.status.is_gap()) {
        let name = record.control_name.as_str();
        if !seen.insert(name) {
            continue;
        }
        let remediation = match catalog.get(name) {
            Some(text) => text,
            None => {
                tracing::warn!(control = name, "no catalogued remediation; using fallback");
                catalog.fallback()
            }
        };
        entries.push(Recommendation {
            control_name: name.to_string(),
            remediation: remediation.to_string(),
        });
    }

    RecommendationMap { entries }
}
