//! Collector host, data-residency region and telemetry endpoint derivation.

use crate::domain::models::TelemetryHosts;

/// Collector used when neither a host override nor a region applies.
pub const DEFAULT_COLLECTOR_HOST: &str = "collector.newrelic.com";

const ENV_MARKER: &str = "-collector";

/// Region prefix encoded at the start of a license key.
///
/// The prefix is the shortest non-empty run of characters followed by a
/// literal `x`, so `eu01xNRAL...` yields `eu01` and a key starting with `x`
/// looks for the next `x`. A newline before the `x` means no region.
pub fn determine_region(license_key: Option<&str>) -> Option<String> {
    let key = license_key?;
    for (idx, c) in key.char_indices() {
        match c {
            '\n' => return None,
            'x' if idx > 0 => return Some(key[..idx].to_string()),
            _ => {}
        }
    }
    None
}

/// Pick the collector host and the region prefix that goes with it.
///
/// An explicit host wins outright and disables region routing.
pub fn determine_collector_host(
    host: Option<&str>,
    license_key: Option<&str>,
) -> (String, Option<String>) {
    if let Some(host) = host {
        return (host.to_string(), None);
    }

    match determine_region(license_key) {
        Some(region) => (format!("collector.{region}.nr-data.net"), Some(region)),
        None => (DEFAULT_COLLECTOR_HOST.to_string(), None),
    }
}

/// Environment label of a collector host, e.g. `staging` for
/// `staging-collector.newrelic.com`.
///
/// Takes the longest non-empty prefix that is followed by `-collector`,
/// within the first line of the host.
pub fn parse_env(host: &str) -> Option<&str> {
    let line = host.split('\n').next().unwrap_or_default();
    line.rfind(ENV_MARKER)
        .filter(|idx| *idx > 0)
        .map(|idx| &line[..idx])
}

/// Build ingest URLs for the collector environment and region.
///
/// Absent segments are left out of the URL entirely.
pub fn determine_telemetry_hosts(host: &str, region: Option<&str>) -> TelemetryHosts {
    let env = parse_env(host).map(|env| format!("{env}-")).unwrap_or_default();
    let region = region.map(|region| format!("{region}.")).unwrap_or_default();

    TelemetryHosts {
        log: format!("https://{env}log-api.{region}newrelic.com/log/v1"),
        trace: format!("https://{env}trace-api.{region}newrelic.com/trace/v1"),
        metric: format!("https://{env}metric-api.{region}newrelic.com/metric/v1"),
        event: format!("https://{env}insights-collector.{region}newrelic.com/v1/accounts/events"),
    }
}
