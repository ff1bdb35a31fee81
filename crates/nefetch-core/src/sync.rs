//! The dataset sync loop: fetch, re-serialize, write, in order.
//!
//! Strictly sequential and fail-fast. The first error of any kind (network,
//! HTTP status, JSON parse, filesystem) aborts the run; artifacts written
//! earlier in the same run stay in place.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::NefetchConfig;
use crate::dataset::Dataset;
use crate::fetch;
use crate::geojson;

/// Whether to refresh everything or only fill in absent artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Fetch every dataset, overwriting existing artifacts. This is the
    /// historical behavior and the default.
    #[default]
    Refresh,
    /// Skip datasets whose artifact already exists on disk.
    MissingOnly,
}

/// What a sync run did, per dataset.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Datasets fetched and written this run.
    pub written: Vec<Dataset>,
    /// Datasets skipped because the artifact already existed (missing-only mode).
    pub skipped: Vec<Dataset>,
}

/// Mirrors all datasets into `dest`.
///
/// `dest` must already exist; it is never created here, and a missing
/// directory fails the first write. Each artifact is written whole or not
/// at all for this run's purposes only — there is no partial-write
/// protection beyond `fs::write` semantics.
pub fn sync_datasets(dest: &Path, cfg: &NefetchConfig, mode: SyncMode) -> Result<SyncReport> {
    let opts = cfg.fetch_options();
    let mut report = SyncReport::default();

    for dataset in Dataset::ALL {
        let path = dataset.artifact_path(dest);
        if mode == SyncMode::MissingOnly && path.exists() {
            tracing::debug!("{} already present, skipping", path.display());
            report.skipped.push(dataset);
            continue;
        }

        sync_one(dataset, &path, cfg, &opts)
            .with_context(|| format!("syncing dataset {}", dataset.identifier()))?;
        report.written.push(dataset);
    }

    Ok(report)
}

fn sync_one(
    dataset: Dataset,
    path: &Path,
    cfg: &NefetchConfig,
    opts: &fetch::FetchOptions,
) -> Result<()> {
    let url = dataset.remote_url(&cfg.base_url)?;
    tracing::info!("fetching {}", url);

    let body = fetch::fetch_body(url.as_str(), opts)?;
    tracing::debug!("{}: {} bytes received", dataset.identifier(), body.len());

    let text = geojson::reserialize_pretty(&body)
        .with_context(|| format!("body of {}", url))?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("wrote {}", path.display());

    Ok(())
}
