//! Configuration resolution services.

pub mod attributes;
pub mod collector;
pub mod config_resolver;
pub mod features;
pub mod parsing;
pub mod runtime;

pub use attributes::{resolve_attributes, AttributeFn, AttributeFunctions};
pub use collector::{
    determine_collector_host, determine_region, determine_telemetry_hosts, parse_env,
    DEFAULT_COLLECTOR_HOST,
};
pub use config_resolver::{publish, ConfigResolver, CONFIG_KEY, FEATURES_KEY};
pub use features::{determine_feature, resolve_features};
pub use parsing::{parse_app_names, parse_bool, parse_labels, parse_port};
pub use runtime::{verify_runtime_version, RuntimeRequirement};
