//! Static manifest loading
//!
//! Layered YAML manifests merged with figment:
//! - `newrelic.yaml` (application manifest)
//! - `newrelic.local.yaml` (optional local overrides)
//!
//! Environment variables are applied later, per key, by the resolver.

pub mod loader;

pub use loader::{ManifestLoader, LOCAL_MANIFEST_FILE, MANIFEST_FILE};
