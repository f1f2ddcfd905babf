//! Agent Config - bootstrap configuration for a monitoring agent
//!
//! Resolves collector endpoints, licensing, feature flags and telemetry
//! destinations from `NEW_RELIC_*` environment variables and a static YAML
//! manifest, producing an [`AgentConfig`] that is handed to the rest of the
//! agent.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Configuration models, errors and ports
//! - **Service Layer** (`services`): Parsing and resolution logic
//! - **Infrastructure Layer** (`infrastructure`): Manifest loading, process
//!   environment, config store, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use agent_config::infrastructure::env::ProcessEnv;
//! use agent_config::infrastructure::runtime::HostRuntime;
//! use agent_config::{ConfigResolver, ManifestLoader};
//!
//! fn main() -> anyhow::Result<()> {
//!     let manifest = ManifestLoader::load()?;
//!     let agent = ConfigResolver::new(ProcessEnv, manifest).bootstrap(&HostRuntime::current())?;
//!     println!("reporting to {}", agent.config.collector_host);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AgentConfig, AttributeSource, ConfigKey, Feature, FeatureFlags, Label, Manifest, RawValue,
    ResolvedConfig, TelemetryHosts,
};
pub use domain::ports::{ConfigStore, EnvSource, RuntimeProbe};
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::ManifestLoader;
pub use infrastructure::store::InMemoryConfigStore;
pub use services::{publish, AttributeFunctions, ConfigResolver, RuntimeRequirement};
