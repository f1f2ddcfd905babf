//! Implementation of the `agent-config features` command.

use anyhow::Result;

use crate::cli::display::settings_table;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::FeatureFlags;
use crate::domain::ports::EnvSource;
use crate::services::config_resolver::ConfigResolver;

/// Resolved feature toggles.
#[derive(Debug, serde::Serialize)]
pub struct FeaturesOutput {
    /// State of every feature.
    pub features: FeatureFlags,
}

impl CommandOutput for FeaturesOutput {
    fn to_human(&self) -> String {
        let mut table = settings_table(&["Feature", "Enabled"]);
        for (feature, enabled) in self.features.iter() {
            table.add_row(vec![feature.to_string(), enabled.to_string()]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.features).unwrap_or_default()
    }
}

/// Resolve and print feature toggles.
pub fn execute<E: EnvSource>(resolver: &ConfigResolver<E>, json_mode: bool) -> Result<()> {
    let features = resolver.resolve_features();
    output(&FeaturesOutput { features }, json_mode);
    Ok(())
}
