//! Resolved connection and identity configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::feature::FeatureFlags;

/// Prefix shared by every agent environment variable.
pub const ENV_PREFIX: &str = "NEW_RELIC_";

/// Settings looked up through `determine_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Collector host override.
    Host,
    /// Account license key; also selects the region.
    LicenseKey,
    /// Collector port.
    Port,
    /// Collector URL scheme.
    Scheme,
    /// `;`-separated application names.
    AppName,
    /// Whether telemetry harvesting runs at all.
    HarvestEnabled,
    /// `;`/`:`-separated label pairs.
    Labels,
    /// Agent log destination.
    Log,
}

impl ConfigKey {
    /// Manifest key, also the lowercase form of the env var suffix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::LicenseKey => "license_key",
            Self::Port => "port",
            Self::Scheme => "scheme",
            Self::AppName => "app_name",
            Self::HarvestEnabled => "harvest_enabled",
            Self::Labels => "labels",
            Self::Log => "log",
        }
    }

    /// Environment variable consulted for this key, e.g. `NEW_RELIC_LICENSE_KEY`.
    pub fn env_var(self) -> String {
        format!("{ENV_PREFIX}{}", self.name().to_uppercase())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An untyped setting as read from the environment or the manifest.
///
/// Environment values always arrive as `Text`; the manifest may carry
/// native booleans and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Native boolean.
    Bool(bool),
    /// Native integer.
    Integer(i64),
    /// Free-form text.
    Text(String),
}

impl RawValue {
    /// Textual form of the value, stringifying non-text scalars.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A `key:value` label attached to the reporting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub key: String,
    /// Label value.
    pub value: String,
}

impl Label {
    /// Build a label from its key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ingest endpoints for each telemetry purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryHosts {
    /// Log ingest endpoint.
    pub log: String,
    /// Span ingest endpoint.
    pub trace: String,
    /// Dimensional metric ingest endpoint.
    pub metric: String,
    /// Custom event ingest endpoint.
    pub event: String,
}

impl TelemetryHosts {
    /// Endpoints keyed by purpose name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("log", self.log.as_str()),
            ("trace", self.trace.as_str()),
            ("metric", self.metric.as_str()),
            ("event", self.event.as_str()),
        ]
        .into_iter()
    }
}

/// Connection and identity settings for the agent.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Explicit collector host override, if one was configured.
    pub host: Option<String>,
    /// Account license key.
    pub license_key: Option<String>,
    /// Collector port.
    pub port: u16,
    /// Collector URL scheme, `https` unless overridden.
    pub scheme: String,
    /// `None` when no application name is configured at all.
    pub app_names: Option<Vec<String>>,
    /// Whether telemetry harvesting runs at all.
    pub harvest_enabled: bool,
    /// Collector the agent connects to, after override and region rules.
    pub collector_host: String,
    /// Region parsed from the license key, when the key carries one.
    pub region_prefix: Option<String>,
    /// Attributes attached to every reported event.
    pub automatic_attributes: BTreeMap<String, serde_json::Value>,
    /// Labels in configuration order.
    pub labels: Vec<Label>,
    /// Ingest endpoints derived from the collector host and region.
    pub telemetry_hosts: TelemetryHosts,
}

/// Everything the rest of the agent needs from bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Connection and identity settings.
    pub config: ResolvedConfig,
    /// Resolved feature toggles.
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_names() {
        assert_eq!(ConfigKey::Host.env_var(), "NEW_RELIC_HOST");
        assert_eq!(ConfigKey::LicenseKey.env_var(), "NEW_RELIC_LICENSE_KEY");
        assert_eq!(ConfigKey::AppName.env_var(), "NEW_RELIC_APP_NAME");
        assert_eq!(ConfigKey::HarvestEnabled.env_var(), "NEW_RELIC_HARVEST_ENABLED");
    }

    #[test]
    fn test_raw_value_deserializes_scalars() {
        let port: RawValue = serde_json::from_str("443").unwrap();
        assert_eq!(port, RawValue::Integer(443));

        let text: RawValue = serde_json::from_str("\"443\"").unwrap();
        assert_eq!(text, RawValue::Text("443".to_string()));

        let flag: RawValue = serde_json::from_str("false").unwrap();
        assert_eq!(flag, RawValue::Bool(false));
    }

    #[test]
    fn test_raw_value_into_text() {
        assert_eq!(RawValue::Integer(8080).into_text(), "8080");
        assert_eq!(RawValue::Bool(true).into_text(), "true");
        assert_eq!(RawValue::from("abc").into_text(), "abc");
    }
}
