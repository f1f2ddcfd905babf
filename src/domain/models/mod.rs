//! Domain models

pub mod attribute;
pub mod config;
pub mod feature;
pub mod manifest;

pub use attribute::AttributeSource;
pub use config::{AgentConfig, ConfigKey, Label, RawValue, ResolvedConfig, TelemetryHosts};
pub use feature::{Feature, FeatureFlags, FeatureSetting, LEGACY_SQL_COLLECTION};
pub use manifest::Manifest;
