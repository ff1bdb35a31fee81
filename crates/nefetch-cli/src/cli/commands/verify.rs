//! `nefetch verify` – check local dataset files are canonical pretty JSON.

use anyhow::Result;
use nefetch_core::dataset::Dataset;
use nefetch_core::status::{check_artifact, ArtifactCheck};
use std::path::Path;

pub fn run_verify(dest: &Path) -> Result<()> {
    for dataset in Dataset::ALL {
        let path = dataset.artifact_path(dest);
        let label = match check_artifact(&path)? {
            ArtifactCheck::Missing => "missing",
            ArtifactCheck::Canonical => "ok",
            ArtifactCheck::Reformatted => "valid JSON, not canonical",
            ArtifactCheck::Invalid => "INVALID JSON",
        };
        println!("{:<26}  {}", label, path.display());
    }
    Ok(())
}
