//! Process environment adapter.

use crate::domain::ports::EnvSource;

/// Reads variables from the current process environment.
///
/// Variables whose value is not valid UTF-8 are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).and_then(|value| value.into_string().ok())
    }
}
