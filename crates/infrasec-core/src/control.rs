//! # Control Records
//!
//! A control is a named compliance requirement ("Backup Policy") together
//! with its assessed status and whether evidence exists for it. One
//! `ControlRecord` corresponds to one row of an uploaded control table.
//!
//! ## Status Taxonomy
//!
//! | Status | Weight in primary readiness |
//! |--------|-----------------------------|
//! | Compliant | 1.0 |
//! | Partially Compliant | 0.5 |
//! | Non-Compliant | 0.0 |
//!
//! Every `match` on `ControlStatus` is exhaustive. A new status forces every
//! scoring path to decide how to weigh it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InfrasecError;

/// Domain reported for controls without a dotted identifier.
pub const OTHER_DOMAIN: &str = "Other";

/// Assessed status of a single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlStatus {
    /// The control is fully implemented.
    #[serde(rename = "Compliant")]
    Compliant,
    /// The control is implemented in part.
    #[serde(rename = "Partially Compliant")]
    PartiallyCompliant,
    /// The control is missing or ineffective.
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl ControlStatus {
    /// Returns all statuses in reporting order.
    pub fn all() -> &'static [ControlStatus] {
        &[Self::Compliant, Self::PartiallyCompliant, Self::NonCompliant]
    }

    /// Returns the display label. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::PartiallyCompliant => "Partially Compliant",
            Self::NonCompliant => "Non-Compliant",
        }
    }

    /// Contribution of this status to the primary readiness score.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Compliant => 1.0,
            Self::PartiallyCompliant => 0.5,
            Self::NonCompliant => 0.0,
        }
    }

    /// Whether this status leaves a gap that needs remediation.
    pub fn is_gap(&self) -> bool {
        !matches!(self, Self::Compliant)
    }
}

impl std::fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlStatus {
    type Err = InfrasecError;

    /// Parse a status label as found in uploaded tables.
    ///
    /// Case-insensitive and whitespace-tolerant. Accepts the canonical
    /// labels plus the spellings spreadsheets commonly carry
    /// (`Partial`, `Non Compliant`, `Noncompliant`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "compliant" => Ok(Self::Compliant),
            "partially compliant" | "partially-compliant" | "partial" => {
                Ok(Self::PartiallyCompliant)
            }
            "non-compliant" | "non compliant" | "noncompliant" => Ok(Self::NonCompliant),
            _ => Err(InfrasecError::Validation(format!(
                "unknown control status: {s:?}"
            ))),
        }
    }
}

/// Domain prefix of a raw control identifier.
///
/// Returns the text before the first `.`, or [`OTHER_DOMAIN`] when there is
/// no `.`. A leading `.` yields an empty prefix.
pub fn domain_prefix(id: &str) -> &str {
    id.split_once('.')
        .map(|(prefix, _)| prefix)
        .unwrap_or(OTHER_DOMAIN)
}

/// Dotted control identifier such as `A.5.1` or `PR.AC-1`.
///
/// The segment before the first `.` names the control's domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    /// Build an identifier from a raw cell value.
    ///
    /// Returns `None` for blank input; a blank cell means "no identifier".
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The domain prefix: everything before the first `.`.
    ///
    /// Identifiers without a `.`, or with an empty prefix, fall into
    /// [`OTHER_DOMAIN`].
    pub fn domain(&self) -> &str {
        domain_prefix(&self.0)
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a control table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    /// Optional dotted identifier.
    pub control_id: Option<ControlId>,
    /// Human-readable control label, used as the remediation lookup key.
    pub control_name: String,
    /// Assessed status.
    pub status: ControlStatus,
    /// Whether supporting evidence has been collected.
    pub evidence_available: bool,
}

impl ControlRecord {
    /// Construct a record, rejecting an empty control name.
    pub fn new(
        control_id: Option<ControlId>,
        control_name: impl Into<String>,
        status: ControlStatus,
        evidence_available: bool,
    ) -> Result<Self, InfrasecError> {
        let control_name = control_name.into().trim().to_string();
        if control_name.is_empty() {
            return Err(InfrasecError::Validation(
                "control name must not be empty".into(),
            ));
        }
        Ok(Self {
            control_id,
            control_name,
            status,
            evidence_available,
        })
    }

    /// Domain of this record, derived from its identifier.
    pub fn domain(&self) -> &str {
        self.control_id
            .as_ref()
            .map(ControlId::domain)
            .unwrap_or(OTHER_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_roundtrip() {
        for status in ControlStatus::all() {
            let parsed: ControlStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn status_parse_is_lenient_on_case_and_spacing() {
        assert_eq!(
            "  compliant ".parse::<ControlStatus>().unwrap(),
            ControlStatus::Compliant
        );
        assert_eq!(
            "PARTIAL".parse::<ControlStatus>().unwrap(),
            ControlStatus::PartiallyCompliant
        );
        assert_eq!(
            "Non Compliant".parse::<ControlStatus>().unwrap(),
            ControlStatus::NonCompliant
        );
        assert_eq!(
            "noncompliant".parse::<ControlStatus>().unwrap(),
            ControlStatus::NonCompliant
        );
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert!("".parse::<ControlStatus>().is_err());
        assert!("Exempt".parse::<ControlStatus>().is_err());
        assert!("compliantish".parse::<ControlStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_display_labels() {
        let json = serde_json::to_string(&ControlStatus::PartiallyCompliant).unwrap();
        assert_eq!(json, "\"Partially Compliant\"");
        for status in ControlStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn only_compliant_is_not_a_gap() {
        assert!(!ControlStatus::Compliant.is_gap());
        assert!(ControlStatus::PartiallyCompliant.is_gap());
        assert!(ControlStatus::NonCompliant.is_gap());
    }

    #[test]
    fn weights_are_ordered() {
        assert_eq!(ControlStatus::Compliant.weight(), 1.0);
        assert_eq!(ControlStatus::PartiallyCompliant.weight(), 0.5);
        assert_eq!(ControlStatus::NonCompliant.weight(), 0.0);
    }

    #[test]
    fn control_id_blank_is_none() {
        assert!(ControlId::new("").is_none());
        assert!(ControlId::new("   ").is_none());
        assert_eq!(ControlId::new(" A.1 ").unwrap().as_str(), "A.1");
    }

    #[test]
    fn control_id_domain_prefix() {
        assert_eq!(ControlId::new("A.1.2").unwrap().domain(), "A");
        assert_eq!(ControlId::new("PR.AC-1").unwrap().domain(), "PR");
        assert_eq!(ControlId::new("Other").unwrap().domain(), OTHER_DOMAIN);
        assert_eq!(ControlId::new("CTRL7").unwrap().domain(), OTHER_DOMAIN);
        assert_eq!(ControlId::new(".5").unwrap().domain(), "");
    }

    #[test]
    fn domain_prefix_takes_text_verbatim() {
        assert_eq!(domain_prefix(".5"), "");
        assert_eq!(domain_prefix(" A.1"), " A");
        assert_eq!(domain_prefix("A..1"), "A");
        assert_eq!(domain_prefix(""), OTHER_DOMAIN);
    }

    #[test]
    fn record_rejects_empty_name() {
        let err = ControlRecord::new(None, "  ", ControlStatus::Compliant, true).unwrap_err();
        assert!(err.to_string().contains("control name"));
    }

    #[test]
    fn record_domain_without_id_is_other() {
        let rec = ControlRecord::new(None, "Backup Policy", ControlStatus::Compliant, true).unwrap();
        assert_eq!(rec.domain(), OTHER_DOMAIN);
        let rec = ControlRecord::new(
            ControlId::new("A.12.3"),
            "Backup Policy",
            ControlStatus::Compliant,
            true,
        )
        .unwrap();
        assert_eq!(rec.domain(), "A");
    }
}
