//! # Content Digest
//!
//! SHA-256 fingerprints of ingested control rows. Two uploads with the same
//! rows in the same order produce the same digest, regardless of how the
//! source file was formatted (column order, spacing, status spelling).
//!
//! The digest is computed over the JSON form of the parsed records, not
//! over the raw upload. `ControlRecord` has no map fields, so its JSON form
//! has a fixed key order and is stable.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::control::ControlRecord;
use crate::error::InfrasecError;

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fingerprint an ordered batch of control records.
pub fn records_digest(records: &[ControlRecord]) -> Result<ContentDigest, InfrasecError> {
    let canonical = serde_json::to_vec(records)?;
    let hash = Sha256::digest(&canonical);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Ok(ContentDigest { bytes })
}
