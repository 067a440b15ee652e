//! # infrasec-core — Foundational Types
//!
//! Defines the primitives every other infrasec crate builds on. It depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Enums over string comparisons.** A control's status is a
//!    `ControlStatus`, parsed once at the ingest boundary. Every consumer
//!    matches on it exhaustively.
//!
//! 2. **Newtype wrappers for identifiers.** `ControlId` carries the dotted
//!    control identifier and knows how to derive its domain prefix.
//!
//! 3. **Request-scoped context.** `AssessmentContext` carries who asked,
//!    against which standard, and when. It is passed explicitly to each
//!    operation; there is no global session state.
//!
//! 4. **Digests over canonical JSON.** `records_digest()` fingerprints the
//!    ingested rows so identical input always yields an identical report id.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `infrasec-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod control;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use context::{AssessmentContext, Requester, DEFAULT_STANDARD};
pub use control::{domain_prefix, ControlId, ControlRecord, ControlStatus, OTHER_DOMAIN};
pub use digest::{records_digest, ContentDigest};
pub use error::InfrasecError;
