//! Implementation of the `agent-config check-runtime` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::ports::RuntimeProbe;
use crate::infrastructure::runtime::HostRuntime;
use crate::services::runtime::{verify_runtime_version, RuntimeRequirement, MINIMUM_RUNTIME_VERSION};

/// Arguments for `check-runtime`.
#[derive(Args, Debug)]
pub struct CheckRuntimeArgs {
    /// Runtime version to check (defaults to the compiler that built this binary)
    #[arg(long)]
    pub runtime_version: Option<String>,

    /// Minimum supported version
    #[arg(long, default_value = MINIMUM_RUNTIME_VERSION)]
    pub minimum: String,

    /// Capability that proves compatibility regardless of version
    #[arg(long)]
    pub capability: Option<String>,

    /// Capabilities the runtime exposes
    #[arg(long = "has", value_delimiter = ',')]
    pub has: Vec<String>,
}

/// Outcome of a passing runtime check.
#[derive(Debug, serde::Serialize)]
pub struct CheckRuntimeOutput {
    /// Version that was checked.
    pub runtime_version: String,
    /// Minimum it was checked against.
    pub minimum: String,
    /// Always true; an unsupported runtime is reported as an error.
    pub supported: bool,
}

impl CommandOutput for CheckRuntimeOutput {
    fn to_human(&self) -> String {
        format!(
            "Runtime {} is supported (minimum {})",
            self.runtime_version, self.minimum
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Check a runtime version against the minimum.
pub fn execute(args: &CheckRuntimeArgs, json_mode: bool) -> Result<()> {
    let mut runtime = args
        .runtime_version
        .as_ref()
        .map_or_else(HostRuntime::current, |version| HostRuntime::new(version.as_str()));
    for marker in &args.has {
        runtime = runtime.with_capability(marker.as_str());
    }

    let mut requirement = RuntimeRequirement::new(args.minimum.as_str());
    if let Some(marker) = &args.capability {
        requirement = requirement.with_capability(marker.as_str());
    }

    verify_runtime_version(&runtime, &requirement)?;

    output(
        &CheckRuntimeOutput {
            runtime_version: runtime.version(),
            minimum: requirement.minimum,
            supported: true,
        },
        json_mode,
    );
    Ok(())
}
