//! # infrasec-compliance — Readiness Scoring
//!
//! Turns an uploaded control table into readiness scores and a list of
//! remediation suggestions.
//!
//! - **Ingest** (`ingest.rs`): CSV → `Vec<ControlRecord>`, with header
//!   matching and per-cell validation. Malformed input is rejected whole.
//!
//! - **Scorer** (`scorer.rs`): `score()` computes the status breakdown and
//!   the two readiness ratios. Empty input is an explicit `NoData` error.
//!
//! - **Domains** (`domain.rs`): `domain_of()` and the per-domain status
//!   breakdown keyed by control-id prefix.
//!
//! - **Recommendations** (`recommend.rs`): the static remediation catalog
//!   and `recommend()`, which maps every gap to its remediation text.
//!
//! - **Guidance** (`guidance.rs`): fixed network architecture advice per
//!   environment type.
//!
//! - **Report** (`report.rs`): assembles all of the above under an
//!   `AssessmentContext` and renders it as text or JSON.
//!
//! ## Readiness Formulas
//!
//! ```text
//! primary   = (compliant + 0.5 × partial) / total
//! secondary = rows_with_evidence / total
//! ```
//!
//! Both are rounded to two decimals (ties to even) and lie in [0, 1].

pub mod domain;
pub mod error;
pub mod guidance;
pub mod ingest;
pub mod recommend;
pub mod report;
pub mod scorer;

pub use domain::{domain_breakdown, domain_of, DomainBreakdown};
pub use error::{ComplianceError, IngestError};
pub use guidance::{
    InvalidSelection, NetworkEnvironment, NetworkGuidance, INVALID_SELECTION_MESSAGE,
};
pub use ingest::{parse_evidence, read_controls};
pub use recommend::{
    recommend, Recommendation, RecommendationMap, RemediationCatalog, FALLBACK_REMEDIATION,
};
pub use report::{build_report, AssessmentReport};
pub use scorer::{score, ScoreSummary, StatusBreakdown};
