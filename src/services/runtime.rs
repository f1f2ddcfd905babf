//! Host runtime version gate.

use std::cmp::Ordering;
use tracing::{info, warn};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::RuntimeProbe;

/// Oldest host runtime the agent supports.
pub const MINIMUM_RUNTIME_VERSION: &str = "1.83";

/// Minimum version plus an optional capability that proves compatibility
/// regardless of the reported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeRequirement {
    /// Oldest accepted version.
    pub minimum: String,
    /// Capability marker that bypasses the version comparison.
    pub capability: Option<String>,
}

impl RuntimeRequirement {
    /// Requirement on `minimum` with no capability bypass.
    pub fn new(minimum: impl Into<String>) -> Self {
        Self {
            minimum: minimum.into(),
            capability: None,
        }
    }

    /// Accept any version when the runtime reports `marker`.
    #[must_use]
    pub fn with_capability(mut self, marker: impl Into<String>) -> Self {
        self.capability = Some(marker.into());
        self
    }
}

impl Default for RuntimeRequirement {
    fn default() -> Self {
        Self::new(MINIMUM_RUNTIME_VERSION)
    }
}

/// Refuse to start on a runtime older than the requirement.
pub fn verify_runtime_version<P: RuntimeProbe + ?Sized>(
    probe: &P,
    requirement: &RuntimeRequirement,
) -> ConfigResult<()> {
    if let Some(marker) = &requirement.capability {
        if probe.has_capability(marker) {
            info!(capability = %marker, "runtime capability present, skipping version check");
            return Ok(());
        }
    }

    let found = probe.version();
    if compare_versions(&found, &requirement.minimum) == Ordering::Less {
        warn!(found = %found, required = %requirement.minimum, "unsupported runtime version");
        return Err(ConfigError::UnsupportedRuntime {
            found,
            required: requirement.minimum.clone(),
        });
    }

    Ok(())
}

/// Compare dotted version strings component by component.
///
/// Missing components count as zero and only the leading digits of each
/// component are significant, so `10.4-rc1` equals `10.4.0`.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left = version_components(left);
    let right = version_components(right);
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let a = left.get(i).copied().unwrap_or(0);
            let b = right.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn version_components(version: &str) -> Vec<u64> {
    version
        .trim()
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}
