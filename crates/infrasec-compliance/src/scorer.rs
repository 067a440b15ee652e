//! # Readiness Scorer
//!
//! Computes the status breakdown and the two readiness ratios for a batch
//! of control records.
//!
//! ## Invariants
//!
//! - `compliant + partial + noncompliant == total` for every input.
//! - Both readiness ratios lie in [0, 1] and are rounded to two decimals,
//!   ties to even (`1/8` → `0.12`, `3/8` → `0.38`).
//! - An empty batch is `ComplianceError::NoData`. There is no zero-row
//!   summary; callers decide how to present the absence of data.

use infrasec_core::{ControlRecord, ControlStatus};
use serde::{Deserialize, Serialize};

use crate::error::ComplianceError;

/// Count of controls per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// Controls marked Compliant.
    pub compliant_count: usize,
    /// Controls marked Partially Compliant.
    pub partial_count: usize,
    /// Controls marked Non-Compliant.
    pub noncompliant_count: usize,
}

impl StatusBreakdown {
    /// Count one more control with `status`.
    pub fn record(&mut self, status: ControlStatus) {
        match status {
            ControlStatus::Compliant => self.compliant_count += 1,
            ControlStatus::PartiallyCompliant => self.partial_count += 1,
            ControlStatus::NonCompliant => self.noncompliant_count += 1,
        }
    }

    /// Total number of controls counted.
    pub fn total(&self) -> usize {
        self.compliant_count + self.partial_count + self.noncompliant_count
    }

    /// Count for a single status.
    pub fn count(&self, status: ControlStatus) -> usize {
        match status {
            ControlStatus::Compliant => self.compliant_count,
            ControlStatus::PartiallyCompliant => self.partial_count,
            ControlStatus::NonCompliant => self.noncompliant_count,
        }
    }
}

/// Scores derived from one batch of control records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Status counts.
    #[serde(flatten)]
    pub breakdown: StatusBreakdown,
    /// Number of rows scored.
    pub total: usize,
    /// `(compliant + 0.5 × partial) / total`, two decimals.
    pub primary_readiness: f64,
    /// `rows_with_evidence / total`, two decimals.
    pub secondary_readiness: f64,
}

impl ScoreSummary {
    /// Controls marked Compliant.
    pub fn compliant_count(&self) -> usize {
        self.breakdown.compliant_count
    }

    /// Controls marked Partially Compliant.
    pub fn partial_count(&self) -> usize {
        self.breakdown.partial_count
    }

    /// Controls marked Non-Compliant.
    pub fn noncompliant_count(&self) -> usize {
        self.breakdown.noncompliant_count
    }
}

/// Score a batch of control records.
pub fn score(records: &[ControlRecord]) -> Result<ScoreSummary, ComplianceError> {
    if records.is_empty() {
        return Err(ComplianceError::NoData);
    }

    let mut breakdown = StatusBreakdown::default();
    let mut with_evidence = 0usize;
    for record in records {
        breakdown.record(record.status);
        if record.evidence_available {
            with_evidence += 1;
        }
    }

    let total = records.len();
    // Partial controls weigh one half, so count in half points.
    let half_points = 2 * breakdown.compliant_count + breakdown.partial_count;
    let summary = ScoreSummary {
        breakdown,
        total,
        primary_readiness: ratio2(half_points, 2 * total),
        secondary_readiness: ratio2(with_evidence, total),
    };

    tracing::debug!(
        total,
        primary = summary.primary_readiness,
        secondary = summary.secondary_readiness,
        "scored control batch"
    );
    Ok(summary)
}

/// `num / den` rounded to two decimals, ties to even.
///
/// Works on the exact fraction so that `0.125` is a true tie rather than
/// whatever `0.125 * 100.0` happens to produce.
fn ratio2(num: usize, den: usize) -> f64 {
    let scaled = num as u64 * 100;
    let den = den as u64;
    let mut hundredths = scaled / den;
    let twice_rem = 2 * (scaled % den);
    if twice_rem > den || (twice_rem == den && hundredths % 2 == 1) {
        hundredths += 1;
    }
    hundredths as f64 / 100.0
}
