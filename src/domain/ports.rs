//! Ports the resolver uses to reach the outside world.

use std::collections::HashMap;

use super::errors::ConfigResult;

/// Read access to environment variables.
pub trait EnvSource {
    /// Value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Key-value registry that resolved configuration is published into.
pub trait ConfigStore {
    /// Publish `value` under `key`.
    fn put(&mut self, key: &str, value: serde_json::Value) -> ConfigResult<()>;

    /// Value published under `key`, if any.
    fn get(&self, key: &str) -> Option<&serde_json::Value>;
}

/// Reports facts about the runtime hosting the agent.
pub trait RuntimeProbe {
    /// Dotted version string, e.g. `1.85.0`.
    fn version(&self) -> String;

    /// Whether the runtime exposes the named capability.
    fn has_capability(&self, marker: &str) -> bool;
}
