//! The fixed Natural Earth dataset catalog.
//!
//! Two 1:10m admin boundary datasets are mirrored: country polygons
//! (with lakes carved out) and first-order state/province polygons.
//! Identifiers drive both the remote URL and the local artifact name.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Default remote base: GitHub raw content for the natural-earth-vector repo.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson";

/// A mirrored Natural Earth boundary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Admin-0 country boundaries, lakes variant.
    CountriesLakes,
    /// Admin-1 state and province boundaries.
    StatesProvinces,
}

impl Dataset {
    /// All datasets, in sync order. The order is part of the contract:
    /// countries are fetched before provinces.
    pub const ALL: [Dataset; 2] = [Dataset::CountriesLakes, Dataset::StatesProvinces];

    /// Upstream identifier; also the stem of the local artifact name.
    pub fn identifier(&self) -> &'static str {
        match self {
            Dataset::CountriesLakes => "ne_10m_admin_0_countries_lakes",
            Dataset::StatesProvinces => "ne_10m_admin_1_states_provinces",
        }
    }

    /// Remote URL for this dataset: `<base_url>/<identifier>.geojson`.
    pub fn remote_url(&self, base_url: &str) -> Result<Url> {
        let raw = format!(
            "{}/{}.geojson",
            base_url.trim_end_matches('/'),
            self.identifier()
        );
        Url::parse(&raw).with_context(|| format!("invalid dataset URL: {}", raw))
    }

    /// Local artifact filename: `<identifier>.json`.
    pub fn artifact_name(&self) -> String {
        format!("{}.json", self.identifier())
    }

    /// Full artifact path under the destination directory.
    pub fn artifact_path(&self, dest: &Path) -> PathBuf {
        dest.join(self.artifact_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_the_upstream_names() {
        assert_eq!(
            Dataset::CountriesLakes.identifier(),
            "ne_10m_admin_0_countries_lakes"
        );
        assert_eq!(
            Dataset::StatesProvinces.identifier(),
            "ne_10m_admin_1_states_provinces"
        );
    }

    #[test]
    fn sync_order_is_countries_then_provinces() {
        assert_eq!(
            Dataset::ALL,
            [Dataset::CountriesLakes, Dataset::StatesProvinces]
        );
    }

    #[test]
    fn remote_url_matches_upstream_template() {
        let url = Dataset::CountriesLakes.remote_url(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            url.as_str(),
            "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_10m_admin_0_countries_lakes.geojson"
        );
        let url = Dataset::StatesProvinces.remote_url(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            url.as_str(),
            "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_10m_admin_1_states_provinces.geojson"
        );
    }

    #[test]
    fn remote_url_tolerates_trailing_slash_in_base() {
        let a = Dataset::CountriesLakes
            .remote_url("http://127.0.0.1:8080/geojson/")
            .unwrap();
        let b = Dataset::CountriesLakes
            .remote_url("http://127.0.0.1:8080/geojson")
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn remote_url_rejects_garbage_base() {
        assert!(Dataset::CountriesLakes.remote_url("not a url").is_err());
    }

    #[test]
    fn artifact_path_is_json_under_dest() {
        let p = Dataset::StatesProvinces.artifact_path(Path::new("data"));
        assert_eq!(
            p.to_string_lossy(),
            "data/ne_10m_admin_1_states_provinces.json"
        );
    }
}
