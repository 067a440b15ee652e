//! # Assessment Context
//!
//! Request-scoped metadata for a single scoring run: who asked, which
//! standard the controls are measured against, where the rows came from,
//! and when the run happened.
//!
//! The context is built once per invocation and passed explicitly to every
//! operation that needs it. Nothing here is global and nothing outlives
//! the run.
//!
//! ## Timestamps
//!
//! `created_at` is UTC truncated to whole seconds so that serialized
//! reports render as `YYYY-MM-DDTHH:MM:SSZ`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InfrasecError;

/// Standard assumed when the caller names none.
pub const DEFAULT_STANDARD: &str = "ISO 27001";

/// E-mail address of the person requesting an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requester(String);

impl Requester {
    /// Validate and wrap an e-mail address.
    ///
    /// Only the shape is checked: one `@` with a non-empty local part and a
    /// domain containing a `.`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InfrasecError> {
        let email = raw.as_ref().trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            return Err(InfrasecError::Validation(format!(
                "invalid requester e-mail address: {email:?}"
            )));
        }
        Ok(Self(email.to_string()))
    }

    /// Access the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata carried through one assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentContext {
    /// Unique id of this run.
    pub assessment_id: Uuid,
    /// Optional requester address.
    pub requester: Option<Requester>,
    /// Name of the standard the controls belong to.
    pub standard: String,
    /// Where the control rows came from (file name or `stdin`).
    pub source: String,
    /// When the run started, UTC, whole seconds.
    pub created_at: DateTime<Utc>,
}

impl AssessmentContext {
    /// Start a new context for `source`, measured against [`DEFAULT_STANDARD`].
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            assessment_id: Uuid::new_v4(),
            requester: None,
            standard: DEFAULT_STANDARD.to_string(),
            source: source.into(),
            created_at: truncate_to_seconds(Utc::now()),
        }
    }

    /// Set the standard name. Blank names keep the current value.
    pub fn with_standard(mut self, standard: impl AsRef<str>) -> Self {
        let standard = standard.as_ref().trim();
        if !standard.is_empty() {
            self.standard = standard.to_string();
        }
        self
    }

    /// Attach a requester.
    pub fn with_requester(mut self, requester: Requester) -> Self {
        self.requester = Some(requester);
        self
    }

    /// Pin the creation time.
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = truncate_to_seconds(created_at);
        self
    }

    /// `created_at` formatted as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn created_at_iso8601(&self) -> String {
        self.created_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
