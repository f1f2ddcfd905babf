use figment::providers::{Format, Yaml};
use figment::Figment;
use std::path::Path;
use tracing::debug;

use crate::domain::errors::ConfigResult;
use crate::domain::models::Manifest;

/// Application manifest, relative to the working directory.
pub const MANIFEST_FILE: &str = "newrelic.yaml";
/// Optional local overrides merged on top of the manifest.
pub const LOCAL_MANIFEST_FILE: &str = "newrelic.local.yaml";

/// Manifest loader with hierarchical merging
pub struct ManifestLoader;

impl ManifestLoader {
    /// Load the manifest from the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults (every setting unset)
    /// 2. newrelic.yaml
    /// 3. newrelic.local.yaml
    ///
    /// Missing files are skipped. Environment variables are not merged here;
    /// the resolver consults them per key so they always win.
    pub fn load() -> ConfigResult<Manifest> {
        Self::load_from_dir(".")
    }

    /// Load `newrelic.yaml` and `newrelic.local.yaml` from `dir`
    pub fn load_from_dir(dir: impl AsRef<Path>) -> ConfigResult<Manifest> {
        let dir = dir.as_ref();
        let manifest: Manifest = Figment::new()
            .merge(Yaml::file(dir.join(MANIFEST_FILE)))
            .merge(Yaml::file(dir.join(LOCAL_MANIFEST_FILE)))
            .extract()?;

        debug!(dir = %dir.display(), "manifest loaded");
        Ok(manifest)
    }

    /// Load a single manifest file
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Manifest> {
        let path = path.as_ref();
        let manifest: Manifest = Figment::new().merge(Yaml::file(path)).extract()?;

        debug!(path = %path.display(), "manifest loaded");
        Ok(manifest)
    }
}
