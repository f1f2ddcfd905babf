//! Instrumentation feature flags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where a feature toggle is read from, and its value when neither source
/// sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSetting {
    /// Environment variable, e.g. `NEW_RELIC_ERROR_COLLECTOR_ENABLED`.
    pub env_var: &'static str,
    /// Manifest key, e.g. `error_collector_enabled`.
    pub config_key: &'static str,
    /// Fallback when neither the environment nor the manifest sets the flag.
    pub default: bool,
}

impl FeatureSetting {
    const fn enabled_by_default(env_var: &'static str, config_key: &'static str) -> Self {
        Self {
            env_var,
            config_key,
            default: true,
        }
    }
}

/// Former name of the database query collection toggle.
///
/// Only an explicit opt-in counts, so it defaults to off.
pub const LEGACY_SQL_COLLECTION: FeatureSetting = FeatureSetting {
    env_var: "NEW_RELIC_SQL_COLLECTION_ENABLED",
    config_key: "sql_collection_enabled",
    default: false,
};

/// Agent subsystems that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Error trace and error event collection.
    ErrorCollector,
    /// Database query text collection.
    DbQueryCollection,
    /// Ecto database instrumentation.
    EctoInstrumentation,
    /// Redix client instrumentation.
    RedixInstrumentation,
    /// Capture of function arguments in traces.
    FunctionArgumentCollection,
    /// Request queue time metrics.
    RequestQueuingMetrics,
}

impl Feature {
    /// Every feature, in resolution order.
    pub const ALL: [Feature; 6] = [
        Feature::ErrorCollector,
        Feature::DbQueryCollection,
        Feature::EctoInstrumentation,
        Feature::RedixInstrumentation,
        Feature::FunctionArgumentCollection,
        Feature::RequestQueuingMetrics,
    ];

    /// Snake-case name used in output and as the setting stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErrorCollector => "error_collector",
            Self::DbQueryCollection => "db_query_collection",
            Self::EctoInstrumentation => "ecto_instrumentation",
            Self::RedixInstrumentation => "redix_instrumentation",
            Self::FunctionArgumentCollection => "function_argument_collection",
            Self::RequestQueuingMetrics => "request_queuing_metrics",
        }
    }

    /// Sources and default for this feature's toggle.
    pub const fn setting(self) -> FeatureSetting {
        match self {
            Self::ErrorCollector => FeatureSetting::enabled_by_default(
                "NEW_RELIC_ERROR_COLLECTOR_ENABLED",
                "error_collector_enabled",
            ),
            Self::DbQueryCollection => FeatureSetting::enabled_by_default(
                "NEW_RELIC_DB_QUERY_COLLECTION_ENABLED",
                "db_query_collection_enabled",
            ),
            Self::EctoInstrumentation => FeatureSetting::enabled_by_default(
                "NEW_RELIC_ECTO_INSTRUMENTATION_ENABLED",
                "ecto_instrumentation_enabled",
            ),
            Self::RedixInstrumentation => FeatureSetting::enabled_by_default(
                "NEW_RELIC_REDIX_INSTRUMENTATION_ENABLED",
                "redix_instrumentation_enabled",
            ),
            Self::FunctionArgumentCollection => FeatureSetting::enabled_by_default(
                "NEW_RELIC_FUNCTION_ARGUMENT_COLLECTION_ENABLED",
                "function_argument_collection_enabled",
            ),
            Self::RequestQueuingMetrics => FeatureSetting::enabled_by_default(
                "NEW_RELIC_REQUEST_QUEUING_METRICS_ENABLED",
                "request_queuing_metrics_enabled",
            ),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved on/off state for every [`Feature`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<Feature, bool>);

impl FeatureFlags {
    /// Empty flag set; every feature reads as disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unresolved features read as disabled.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.0.get(&feature).copied().unwrap_or(false)
    }

    /// Features and their state, ordered by feature.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, bool)> + '_ {
        self.0.iter().map(|(feature, enabled)| (*feature, *enabled))
    }
}

impl FromIterator<(Feature, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (Feature, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_serialize_by_name() {
        let flags: FeatureFlags = [
            (Feature::ErrorCollector, true),
            (Feature::DbQueryCollection, false),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&flags).unwrap();
        assert_eq!(json["error_collector"], true);
        assert_eq!(json["db_query_collection"], false);
    }

    #[test]
    fn test_unresolved_feature_is_disabled() {
        let flags = FeatureFlags::new();
        assert!(!flags.is_enabled(Feature::RedixInstrumentation));
    }

    #[test]
    fn test_env_vars_follow_feature_names() {
        for feature in Feature::ALL {
            let setting = feature.setting();
            assert_eq!(
                setting.env_var,
                format!("NEW_RELIC_{}_ENABLED", feature.name().to_uppercase())
            );
            assert_eq!(setting.config_key, format!("{}_enabled", feature.name()));
            assert!(setting.default, "{feature} should default on");
        }
        assert!(!LEGACY_SQL_COLLECTION.default);
    }
}
