//! Parsers for individual settings.

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{Label, RawValue};

/// Parse a collector port.
///
/// Accepts an integer or a string of decimal digits that fits a `u16`;
/// nothing else is coerced.
pub fn parse_port(value: &RawValue) -> ConfigResult<u16> {
    let port = match value {
        RawValue::Integer(port) => u16::try_from(*port).ok(),
        RawValue::Text(text) => text.parse::<u16>().ok(),
        RawValue::Bool(_) => None,
    };

    port.ok_or_else(|| ConfigError::InvalidPort(value.to_string()))
}

/// Split a `;`-separated list of application names.
pub fn parse_app_names(value: Option<&str>) -> Option<Vec<String>> {
    value.map(|names| names.split(';').map(|name| name.trim().to_string()).collect())
}

/// Parse `key:value;key:value` labels.
///
/// Both `;` and `:` separate tokens, empty tokens are dropped, and the rest
/// pair up in order. A trailing key with no value is discarded.
pub fn parse_labels(value: Option<&str>) -> Vec<Label> {
    let Some(value) = value else {
        return Vec::new();
    };

    let tokens: Vec<&str> = value
        .split([';', ':'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    tokens
        .chunks_exact(2)
        .map(|pair| Label::new(pair[0], pair[1]))
        .collect()
}

/// Interpret a boolean setting.
///
/// Only native booleans and the exact strings `"true"` / `"false"` count.
pub fn parse_bool(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Bool(flag) => Some(*flag),
        RawValue::Text(text) if text == "true" => Some(true),
        RawValue::Text(text) if text == "false" => Some(false),
        _ => None,
    }
}
