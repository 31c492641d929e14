//! Helpers shared by the classifier and quote-store artifact loaders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity of a loaded artifact, reported in logs and health output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactInfo {
    /// Version string declared inside the artifact.
    pub version: String,
    /// Content checksum (`blake3:<hex>`); `None` for built-in data.
    pub checksum: Option<String>,
    /// File the artifact was read from, if any.
    pub path: Option<String>,
}

impl ArtifactInfo {
    pub fn builtin(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            checksum: None,
            path: None,
        }
    }
}

/// Compute BLAKE3 hash of artifact bytes with "blake3:" prefix.
///
/// Returns a string in the format: `blake3:{64-char-hex}`
pub fn compute_checksum(data: &[u8]) -> String {
    let hash = blake3::hash(data);
    format!("blake3:{}", hash.to_hex())
}

/// Read an artifact file, returning its contents and checksum.
pub fn read_artifact(path: &Path) -> Result<(String, String)> {
    let bytes = std::fs::read(path)?;
    let checksum = compute_checksum(&bytes);
    let content = String::from_utf8(bytes).map_err(|e| {
        Error::Artifact(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;
    Ok((content, checksum))
}
