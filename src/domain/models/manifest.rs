//! Static application manifest: the defaults behind every environment variable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attribute::AttributeSource;
use super::config::{ConfigKey, RawValue};

/// Statically configured agent settings.
///
/// Every field is optional; the environment always takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Collector host override.
    pub host: Option<String>,
    /// Account license key.
    pub license_key: Option<String>,
    /// Collector port, as an integer or numeric string.
    pub port: Option<RawValue>,
    /// Collector URL scheme.
    pub scheme: Option<String>,
    /// `;`-separated application names.
    pub app_name: Option<String>,
    /// Harvest switch, as a bool or `"true"`/`"false"`.
    pub harvest_enabled: Option<RawValue>,
    /// `;`/`:`-separated label pairs.
    pub labels: Option<String>,
    /// Agent log destination.
    pub log: Option<String>,

    /// Attributes attached to every reported event, by name.
    pub automatic_attributes: BTreeMap<String, AttributeSource>,

    /// Error collector toggle.
    pub error_collector_enabled: Option<bool>,
    /// Legacy name for the database query collection toggle.
    pub sql_collection_enabled: Option<bool>,
    /// Database query collection toggle.
    pub db_query_collection_enabled: Option<bool>,
    /// Ecto instrumentation toggle.
    pub ecto_instrumentation_enabled: Option<bool>,
    /// Redix instrumentation toggle.
    pub redix_instrumentation_enabled: Option<bool>,
    /// Function argument collection toggle.
    pub function_argument_collection_enabled: Option<bool>,
    /// Request queuing metrics toggle.
    pub request_queuing_metrics_enabled: Option<bool>,
}

impl Manifest {
    /// Statically configured value for `key`.
    pub fn value(&self, key: ConfigKey) -> Option<RawValue> {
        let text = |value: &Option<String>| value.clone().map(RawValue::Text);
        match key {
            ConfigKey::Host => text(&self.host),
            ConfigKey::LicenseKey => text(&self.license_key),
            ConfigKey::Port => self.port.clone(),
            ConfigKey::Scheme => text(&self.scheme),
            ConfigKey::AppName => text(&self.app_name),
            ConfigKey::HarvestEnabled => self.harvest_enabled.clone(),
            ConfigKey::Labels => text(&self.labels),
            ConfigKey::Log => text(&self.log),
        }
    }

    /// Feature toggle by manifest key, e.g. `error_collector_enabled`.
    pub fn feature_setting(&self, config_key: &str) -> Option<bool> {
        match config_key {
            "error_collector_enabled" => self.error_collector_enabled,
            "sql_collection_enabled" => self.sql_collection_enabled,
            "db_query_collection_enabled" => self.db_query_collection_enabled,
            "ecto_instrumentation_enabled" => self.ecto_instrumentation_enabled,
            "redix_instrumentation_enabled" => self.redix_instrumentation_enabled,
            "function_argument_collection_enabled" => self.function_argument_collection_enabled,
            "request_queuing_metrics_enabled" => self.request_queuing_metrics_enabled,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::feature::{Feature, LEGACY_SQL_COLLECTION};

    #[test]
    fn test_every_feature_key_is_known() {
        let manifest = Manifest {
            error_collector_enabled: Some(false),
            sql_collection_enabled: Some(false),
            db_query_collection_enabled: Some(false),
            ecto_instrumentation_enabled: Some(false),
            redix_instrumentation_enabled: Some(false),
            function_argument_collection_enabled: Some(false),
            request_queuing_metrics_enabled: Some(false),
            ..Default::default()
        };

        for feature in Feature::ALL {
            assert_eq!(
                manifest.feature_setting(feature.setting().config_key),
                Some(false),
                "{feature}"
            );
        }
        assert_eq!(
            manifest.feature_setting(LEGACY_SQL_COLLECTION.config_key),
            Some(false)
        );
        assert_eq!(manifest.feature_setting("unknown_enabled"), None);
    }

    #[test]
    fn test_value_wraps_text_settings() {
        let manifest = Manifest {
            app_name: Some("web".to_string()),
            port: Some(RawValue::Integer(8443)),
            ..Default::default()
        };

        assert_eq!(
            manifest.value(ConfigKey::AppName),
            Some(RawValue::Text("web".to_string()))
        );
        assert_eq!(manifest.value(ConfigKey::Port), Some(RawValue::Integer(8443)));
        assert_eq!(manifest.value(ConfigKey::Host), None);
    }
}
