//! # Assessment Report
//!
//! Runs the full pipeline for one batch (score, domain breakdown,
//! recommendations, input digest) under an `AssessmentContext` and renders
//! the result.
//!
//! The JSON form is the serde representation of [`AssessmentReport`]. The
//! text form is meant for terminals and plain-text attachments.

use std::fmt;

use infrasec_core::{
    records_digest, AssessmentContext, ContentDigest, ControlRecord, InfrasecError,
};
use serde::Serialize;

use crate::domain::{domain_breakdown, DomainBreakdown};
use crate::error::ComplianceError;
use crate::recommend::{recommend, RecommendationMap, RemediationCatalog};
use crate::scorer::{score, ScoreSummary};

/// Everything derived from one assessment run.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    /// Who, what, when.
    pub context: AssessmentContext,
    /// Status counts and readiness ratios.
    pub summary: ScoreSummary,
    /// Per-domain status counts, in order of first appearance.
    pub domains: Vec<DomainBreakdown>,
    /// Gaps and their remediations, in input order.
    pub recommendations: RecommendationMap,
    /// Fingerprint of the scored rows.
    pub input_digest: ContentDigest,
}

/// Build a report for `records`.
///
/// Fails with `NoData` when `records` is empty.
pub fn build_report(
    context: AssessmentContext,
    records: &[ControlRecord],
    catalog: &RemediationCatalog,
) -> Result<AssessmentReport, ComplianceError> {
    let summary = score(records)?;
    let domains = domain_breakdown(records);
    let recommendations = recommend(records, catalog);
    let input_digest = records_digest(records)?;

    tracing::info!(
        assessment_id = %context.assessment_id,
        standard = %context.standard,
        controls = summary.total,
        gaps = recommendations.len(),
        "assessment complete"
    );

    Ok(AssessmentReport {
        context,
        summary,
        domains,
        recommendations,
        input_digest,
    })
}

impl AssessmentReport {
    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ComplianceError> {
        Ok(serde_json::to_string_pretty(self).map_err(InfrasecError::from)?)
    }

    /// Plain-text rendering. Same as the `Display` output.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssessmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = &self.context;
        let s = &self.summary;

        writeln!(f, "Compliance Readiness Report")?;
        writeln!(f, "===========================")?;
        writeln!(f, "Assessment: {}", ctx.assessment_id)?;
        writeln!(f, "Standard:   {}", ctx.standard)?;
        if let Some(requester) = &ctx.requester {
            writeln!(f, "Requester:  {requester}")?;
        }
        writeln!(f, "Source:     {}", ctx.source)?;
        writeln!(f, "Generated:  {}", ctx.created_at_iso8601())?;
        writeln!(f, "Input:      {}", self.input_digest)?;
        writeln!(f)?;
        writeln!(
            f,
            "Controls: {} ({} compliant, {} partial, {} non-compliant)",
            s.total,
            s.compliant_count(),
            s.partial_count(),
            s.noncompliant_count()
        )?;
        writeln!(f, "{} readiness: {}", ctx.standard, percent(s.primary_readiness))?;
        writeln!(f, "Evidence readiness: {}", percent(s.secondary_readiness))?;

        writeln!(f)?;
        writeln!(f, "Domains:")?;
        let width = self
            .domains
            .iter()
            .map(|d| d.domain.len())
            .max()
            .unwrap_or(0);
        for d in &self.domains {
            let b = &d.breakdown;
            writeln!(
                f,
                "  {:<width$}  total {:>3}  compliant {:>3}  partial {:>3}  non-compliant {:>3}",
                d.domain,
                d.total(),
                b.compliant_count,
                b.partial_count,
                b.noncompliant_count,
            )?;
        }

        writeln!(f)?;
        if self.recommendations.is_empty() {
            writeln!(f, "Gaps: none")?;
        } else {
            writeln!(f, "Gaps ({}):", self.recommendations.len())?;
            for r in &self.recommendations {
                writeln!(f, "  - {}: {}", r.control_name, r.remediation)?;
            }
        }
        Ok(())
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
