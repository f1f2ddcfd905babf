//! Host runtime probe.

use crate::domain::ports::RuntimeProbe;

/// Version of the compiler that built this binary, captured by the build script.
pub const BUILD_RUSTC_VERSION: &str = env!("AGENT_CONFIG_RUSTC_VERSION");

/// Description of the runtime embedding the agent.
///
/// The host reports its own version and the capabilities it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRuntime {
    version: String,
    capabilities: Vec<String>,
}

impl HostRuntime {
    /// Runtime reporting `version` with no capabilities.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            capabilities: Vec::new(),
        }
    }

    /// The toolchain this binary was compiled with.
    pub fn current() -> Self {
        Self::new(BUILD_RUSTC_VERSION)
    }

    /// Advertise a capability marker.
    #[must_use]
    pub fn with_capability(mut self, marker: impl Into<String>) -> Self {
        self.capabilities.push(marker.into());
        self
    }
}

impl RuntimeProbe for HostRuntime {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn has_capability(&self, marker: &str) -> bool {
        self.capabilities.iter().any(|capability| capability == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ConfigError;
    use crate::services::runtime::{
        compare_versions, verify_runtime_version, RuntimeRequirement, MINIMUM_RUNTIME_VERSION,
    };
    use std::cmp::Ordering;

    fn next_major(version: &str) -> String {
        let major: u64 = version
            .split('.')
            .next()
            .and_then(|part| part.parse().ok())
            .unwrap();
        format!("{}.0", major + 1)
    }

    #[test]
    fn test_current_reports_compiler_version() {
        let version = HostRuntime::current().version();
        assert_eq!(version, BUILD_RUSTC_VERSION);
        assert_eq!(version.split('.').count(), 3, "expected semver, got {version}");
        assert_ne!(compare_versions(&version, MINIMUM_RUNTIME_VERSION), Ordering::Less);
    }

    #[test]
    fn test_current_runtime_below_newer_minimum_fails() {
        let runtime = HostRuntime::current();
        let minimum = next_major(&runtime.version());

        let result = verify_runtime_version(&runtime, &RuntimeRequirement::new(minimum.as_str()));
        match result {
            Err(ConfigError::UnsupportedRuntime { found, required }) => {
                assert_eq!(found, BUILD_RUSTC_VERSION);
                assert_eq!(required, minimum);
            }
            other => panic!("Expected UnsupportedRuntime, got {other:?}"),
        }

        let marked = RuntimeRequirement::new(minimum.as_str()).with_capability("persistent_term");
        assert!(verify_runtime_version(&runtime.with_capability("persistent_term"), &marked).is_ok());
    }

    #[test]
    fn test_capabilities() {
        let runtime = HostRuntime::new("1.0").with_capability("persistent_term");
        assert!(runtime.has_capability("persistent_term"));
        assert!(!runtime.has_capability("atomics"));
        assert_eq!(runtime.version(), "1.0");
    }
}
