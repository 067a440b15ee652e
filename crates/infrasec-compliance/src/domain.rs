//! # Control Domains
//!
//! A control's domain is the prefix of its dotted identifier (`A.12.3` →
//! `A`). Controls without an identifier, or with an identifier that has no
//! `.`, are grouped under `Other`. An identifier starting with `.` has an
//! empty domain.

use std::collections::HashMap;

use infrasec_core::{domain_prefix, ControlRecord, OTHER_DOMAIN};
use serde::{Deserialize, Serialize};

use crate::scorer::StatusBreakdown;

/// Domain of an optional raw control identifier.
pub fn domain_of(control_id: Option<&str>) -> &str {
    control_id.map(domain_prefix).unwrap_or(OTHER_DOMAIN)
}

/// Status counts for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainBreakdown {
    /// Domain prefix.
    pub domain: String,
    /// Status counts within the domain.
    #[serde(flatten)]
    pub breakdown: StatusBreakdown,
}

impl DomainBreakdown {
    /// Number of controls in the domain.
    pub fn total(&self) -> usize {
        self.breakdown.total()
    }
}

/// Group records by domain, in order of first appearance.
pub fn domain_breakdown(records: &[ControlRecord]) -> Vec<DomainBreakdown> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut domains: Vec<DomainBreakdown> = Vec::new();

    for record in records {
        let domain = record.domain();
        let slot = *index.entry(domain).or_insert_with(|| {
            domains.push(DomainBreakdown {
                domain: domain.to_string(),
                breakdown: StatusBreakdown::default(),
            });
            domains.len() - 1
        });
        domains[slot].breakdown.record(record.status);
    }

    domains
}
