//! Local artifact inspection: existence, size, and canonical-form checks.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::geojson;

/// On-disk state of one dataset artifact.
#[derive(Debug)]
pub struct ArtifactStatus {
    pub dataset: Dataset,
    pub path: PathBuf,
    /// Size in bytes, or None if the artifact is absent.
    pub bytes: Option<u64>,
}

/// Result of verifying one artifact's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactCheck {
    /// No file on disk.
    Missing,
    /// Valid JSON, byte-identical to its own pretty re-serialization.
    Canonical,
    /// Valid JSON, but not in canonical pretty form.
    Reformatted,
    /// Not valid JSON.
    Invalid,
}

/// Reports existence and size of every dataset artifact under `dest`.
pub fn inspect(dest: &Path) -> Vec<ArtifactStatus> {
    Dataset::ALL
        .into_iter()
        .map(|dataset| {
            let path = dataset.artifact_path(dest);
            let bytes = fs::metadata(&path).ok().map(|m| m.len());
            ArtifactStatus {
                dataset,
                path,
                bytes,
            }
        })
        .collect()
}

/// Classifies the artifact at `path`. Absence is a result, not an error;
/// only an unreadable existing file is. Content that is not valid JSON,
/// non-UTF-8 bytes included, classifies as `Invalid`.
pub fn check_artifact(path: &Path) -> Result<ArtifactCheck> {
    if !path.exists() {
        return Ok(ArtifactCheck::Missing);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if geojson::is_canonical(&bytes) {
        return Ok(ArtifactCheck::Canonical);
    }
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(_) => Ok(ArtifactCheck::Reformatted),
        Err(_) => Ok(ArtifactCheck::Invalid),
    }
}
