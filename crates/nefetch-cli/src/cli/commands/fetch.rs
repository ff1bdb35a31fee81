//! `nefetch fetch` – run the dataset sync.

use anyhow::Result;
use nefetch_core::config::NefetchConfig;
use nefetch_core::sync::{self, SyncMode};
use std::path::Path;

pub fn run_fetch(cfg: &NefetchConfig, dest: &Path, missing_only: bool) -> Result<()> {
    let mode = if missing_only {
        SyncMode::MissingOnly
    } else {
        SyncMode::Refresh
    };

    let report = sync::sync_datasets(dest, cfg, mode)?;

    for dataset in &report.written {
        println!("fetched  {}", dataset.artifact_path(dest).display());
    }
    for dataset in &report.skipped {
        println!("skipped  {} (already present)", dataset.artifact_path(dest).display());
    }
    tracing::info!(
        "sync complete: {} written, {} skipped",
        report.written.len(),
        report.skipped.len()
    );
    Ok(())
}
