//! Implementation of the `agent-config show` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::display::{or_dash, settings_table};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AgentConfig, FeatureFlags, ResolvedConfig};
use crate::domain::ports::EnvSource;
use crate::infrastructure::logging::redact_license_key;
use crate::infrastructure::runtime::HostRuntime;
use crate::infrastructure::store::InMemoryConfigStore;
use crate::services::config_resolver::{publish, ConfigResolver, CONFIG_KEY, FEATURES_KEY};

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the license key instead of a masked form
    #[arg(long)]
    pub reveal_license_key: bool,
}

/// Published configuration and features.
#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    /// Configuration as read back from the store.
    #[serde(flatten)]
    pub agent: AgentConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let config = &self.agent.config;
        let mut table = settings_table(&["Setting", "Value"]);

        let app_names = config.app_names.as_ref().map(|names| names.join(", "));
        let labels = config
            .labels
            .iter()
            .map(|label| format!("{}:{}", label.key, label.value))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec!["collector_host".to_string(), config.collector_host.clone()]);
        table.add_row(vec!["host".to_string(), or_dash(config.host.as_deref())]);
        table.add_row(vec![
            "region_prefix".to_string(),
            or_dash(config.region_prefix.as_deref()),
        ]);
        table.add_row(vec!["port".to_string(), config.port.to_string()]);
        table.add_row(vec!["scheme".to_string(), config.scheme.clone()]);
        table.add_row(vec![
            "license_key".to_string(),
            or_dash(config.license_key.as_deref()),
        ]);
        table.add_row(vec!["app_names".to_string(), or_dash(app_names.as_deref())]);
        table.add_row(vec!["harvest_enabled".to_string(), config.harvest_enabled.to_string()]);
        table.add_row(vec![
            "labels".to_string(),
            or_dash(Some(labels.as_str()).filter(|l| !l.is_empty())),
        ]);
        for (name, value) in &config.automatic_attributes {
            table.add_row(vec![format!("attribute.{name}"), value.to_string()]);
        }
        for (purpose, url) in config.telemetry_hosts.iter() {
            table.add_row(vec![format!("telemetry.{purpose}"), url.to_string()]);
        }
        for (feature, enabled) in self.agent.features.iter() {
            table.add_row(vec![format!("feature.{feature}"), enabled.to_string()]);
        }

        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Bootstrap, publish and print the resolved configuration.
pub fn execute<E: EnvSource>(
    resolver: &ConfigResolver<E>,
    args: &ShowArgs,
    json_mode: bool,
) -> Result<()> {
    let agent = resolver
        .bootstrap(&HostRuntime::current())
        .context("Failed to resolve agent configuration")?;

    let mut store = InMemoryConfigStore::new();
    publish(&mut store, &agent)?;

    let mut config: ResolvedConfig = store
        .load(CONFIG_KEY)?
        .context("Resolved configuration was not published")?;
    let features: FeatureFlags = store
        .load(FEATURES_KEY)?
        .context("Feature flags were not published")?;

    if !args.reveal_license_key {
        config.license_key = config.license_key.as_deref().map(redact_license_key);
    }

    output(
        &ShowOutput {
            agent: AgentConfig { config, features },
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Manifest;
    use std::collections::HashMap;

    #[test]
    fn test_human_output_lists_settings() {
        let env: HashMap<String, String> = [
            ("NEW_RELIC_LICENSE_KEY".to_string(), "eu01xNRAL0123456789abcdef".to_string()),
            ("NEW_RELIC_APP_NAME".to_string(), "web;api".to_string()),
        ]
        .into_iter()
        .collect();
        let agent = ConfigResolver::new(env, Manifest::default())
            .bootstrap(&HostRuntime::current())
            .unwrap();

        let human = ShowOutput { agent }.to_human();

        assert!(human.contains("collector.eu01.nr-data.net"));
        assert!(human.contains("web, api"));
        assert!(human.contains("feature.db_query_collection"));
        assert!(human.contains("telemetry.log"));
    }
}
