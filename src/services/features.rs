//! Feature flag resolution.

use tracing::debug;

use crate::domain::models::{Feature, FeatureFlags, FeatureSetting, Manifest, LEGACY_SQL_COLLECTION};
use crate::domain::ports::EnvSource;

/// Resolve a single toggle.
///
/// The environment variable wins when it is exactly `"true"` or `"false"`;
/// any other value falls through to the manifest, then to the setting's
/// default.
pub fn determine_feature<E: EnvSource + ?Sized>(
    env: &E,
    manifest: &Manifest,
    setting: FeatureSetting,
) -> bool {
    match env.var(setting.env_var).as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => manifest.feature_setting(setting.config_key).unwrap_or(setting.default),
    }
}

/// Resolve every [`Feature`].
///
/// Database query collection was previously called SQL collection; enabling
/// either name turns it on.
pub fn resolve_features<E: EnvSource + ?Sized>(env: &E, manifest: &Manifest) -> FeatureFlags {
    Feature::ALL
        .into_iter()
        .map(|feature| {
            let current = determine_feature(env, manifest, feature.setting());
            let enabled = match feature {
                Feature::DbQueryCollection => {
                    determine_feature(env, manifest, LEGACY_SQL_COLLECTION) || current
                }
                _ => current,
            };
            debug!(feature = %feature, enabled, "feature resolved");
            (feature, enabled)
        })
        .collect()
}
