//! Startup configuration resolution.
//!
//! [`ConfigResolver`] turns environment variables and the static manifest
//! into an [`AgentConfig`]. Resolution runs once, synchronously, before any
//! other agent subsystem starts; the result is handed to dependents by value
//! or published into a [`ConfigStore`].

use tracing::{debug, info, instrument};

use crate::domain::errors::ConfigResult;
use crate::domain::models::{AgentConfig, ConfigKey, FeatureFlags, Manifest, RawValue, ResolvedConfig};
use crate::domain::ports::{ConfigStore, EnvSource, RuntimeProbe};
use crate::infrastructure::logging::redact_license_key;
use crate::services::attributes::{resolve_attributes, AttributeFunctions};
use crate::services::collector::{determine_collector_host, determine_telemetry_hosts};
use crate::services::features::resolve_features;
use crate::services::parsing::{parse_app_names, parse_bool, parse_labels, parse_port};
use crate::services::runtime::{verify_runtime_version, RuntimeRequirement};

/// Store key for the published [`ResolvedConfig`].
pub const CONFIG_KEY: &str = "config";
/// Store key for the published [`FeatureFlags`].
pub const FEATURES_KEY: &str = "features";

/// Collector port when none is configured.
pub const DEFAULT_PORT: i64 = 443;
/// Collector scheme when none is configured.
pub const DEFAULT_SCHEME: &str = "https";

/// Resolves agent configuration from an environment and a manifest.
#[derive(Debug)]
pub struct ConfigResolver<E> {
    env: E,
    manifest: Manifest,
    functions: AttributeFunctions,
    requirement: RuntimeRequirement,
}

impl<E: EnvSource> ConfigResolver<E> {
    /// Resolver with the built-in attribute functions and default runtime minimum.
    pub fn new(env: E, manifest: Manifest) -> Self {
        Self {
            env,
            manifest,
            functions: AttributeFunctions::default(),
            requirement: RuntimeRequirement::default(),
        }
    }

    /// Replace the functions available to computed attributes.
    #[must_use]
    pub fn with_functions(mut self, functions: AttributeFunctions) -> Self {
        self.functions = functions;
        self
    }

    /// Replace the runtime requirement checked by [`bootstrap`](Self::bootstrap).
    #[must_use]
    pub fn with_requirement(mut self, requirement: RuntimeRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Look up a setting: environment first, then the manifest.
    pub fn determine_config(&self, key: ConfigKey) -> Option<RawValue> {
        self.env
            .var(&key.env_var())
            .map(RawValue::Text)
            .or_else(|| self.manifest.value(key))
    }

    /// [`determine_config`](Self::determine_config) with a fallback.
    pub fn determine_config_or(&self, key: ConfigKey, default: impl Into<RawValue>) -> RawValue {
        self.determine_config(key).unwrap_or_else(|| default.into())
    }

    fn determine_text(&self, key: ConfigKey) -> Option<String> {
        self.determine_config(key).map(RawValue::into_text)
    }

    /// Resolve connection, identity and telemetry settings.
    ///
    /// Fails only on a malformed port or an unknown attribute function.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> ConfigResult<ResolvedConfig> {
        let host = self.determine_text(ConfigKey::Host);
        let license_key = self.determine_text(ConfigKey::LicenseKey);
        let port = parse_port(&self.determine_config_or(ConfigKey::Port, DEFAULT_PORT))?;
        let scheme = self
            .determine_config_or(ConfigKey::Scheme, DEFAULT_SCHEME)
            .into_text();
        let app_names = parse_app_names(self.determine_text(ConfigKey::AppName).as_deref());
        let harvest_enabled =
            parse_bool(&self.determine_config_or(ConfigKey::HarvestEnabled, true)).unwrap_or(true);
        let labels = parse_labels(self.determine_text(ConfigKey::Labels).as_deref());

        let (collector_host, region_prefix) =
            determine_collector_host(host.as_deref(), license_key.as_deref());
        let telemetry_hosts = determine_telemetry_hosts(&collector_host, region_prefix.as_deref());

        let automatic_attributes = resolve_attributes(
            &self.manifest.automatic_attributes,
            &self.env,
            &self.functions,
        )?;

        info!(
            collector_host = %collector_host,
            region = ?region_prefix,
            license_key = %license_key.as_deref().map(redact_license_key).unwrap_or_default(),
            app_names = ?app_names,
            harvest_enabled,
            "agent configuration resolved"
        );
        debug!(
            port,
            scheme = %scheme,
            labels = labels.len(),
            attributes = automatic_attributes.len(),
            log_endpoint = %telemetry_hosts.log,
            "connection details"
        );

        Ok(ResolvedConfig {
            host,
            license_key,
            port,
            scheme,
            app_names,
            harvest_enabled,
            collector_host,
            region_prefix,
            automatic_attributes,
            labels,
            telemetry_hosts,
        })
    }

    /// Resolve every feature toggle.
    pub fn resolve_features(&self) -> FeatureFlags {
        resolve_features(&self.env, &self.manifest)
    }

    /// Check the runtime, then resolve configuration and features.
    pub fn bootstrap<P: RuntimeProbe + ?Sized>(&self, probe: &P) -> ConfigResult<AgentConfig> {
        verify_runtime_version(probe, &self.requirement)?;

        Ok(AgentConfig {
            config: self.resolve_config()?,
            features: self.resolve_features(),
        })
    }
}

/// Publish bootstrap results under [`CONFIG_KEY`] and [`FEATURES_KEY`].
pub fn publish<S: ConfigStore + ?Sized>(store: &mut S, agent: &AgentConfig) -> ConfigResult<()> {
    store.put(CONFIG_KEY, serde_json::to_value(&agent.config)?)?;
    store.put(FEATURES_KEY, serde_json::to_value(&agent.features)?)?;
    debug!("agent configuration published");
    Ok(())
}
