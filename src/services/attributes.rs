//! Automatic attribute resolution.
//!
//! Each configured attribute is resolved exactly once at startup. Computed
//! attributes name a function in an [`AttributeFunctions`] registry; the
//! registry replaces runtime lookup of arbitrary callables.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::AttributeSource;
use crate::domain::ports::EnvSource;

/// Signature of a computed attribute.
pub type AttributeFn = fn(&[String]) -> Value;

/// Named functions available to `computed` attributes.
#[derive(Clone)]
pub struct AttributeFunctions {
    functions: HashMap<String, AttributeFn>,
}

impl AttributeFunctions {
    /// A registry with no functions.
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// A registry preloaded with `concat`, `join` and `agent_version`.
    pub fn with_builtins() -> Self {
        let mut functions = Self::empty();
        functions
            .register("concat", concat)
            .register("join", join)
            .register("agent_version", agent_version);
        functions
    }

    /// Add or replace the function called `name`.
    pub fn register(&mut self, name: impl Into<String>, function: AttributeFn) -> &mut Self {
        self.functions.insert(name.into(), function);
        self
    }

    /// Function registered as `name`.
    pub fn get(&self, name: &str) -> Option<AttributeFn> {
        self.functions.get(name).copied()
    }
}

impl Default for AttributeFunctions {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for AttributeFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("AttributeFunctions")
            .field("functions", &names)
            .finish()
    }
}

fn concat(args: &[String]) -> Value {
    Value::String(args.concat())
}

/// First argument is the separator.
fn join(args: &[String]) -> Value {
    match args.split_first() {
        Some((separator, parts)) => Value::String(parts.join(separator)),
        None => Value::String(String::new()),
    }
}

fn agent_version(_args: &[String]) -> Value {
    Value::String(env!("CARGO_PKG_VERSION").to_string())
}

/// Resolve every attribute source to its final value.
///
/// Attributes referring to an unset environment variable are left out.
pub fn resolve_attributes<E: EnvSource + ?Sized>(
    sources: &BTreeMap<String, AttributeSource>,
    env: &E,
    functions: &AttributeFunctions,
) -> ConfigResult<BTreeMap<String, Value>> {
    let mut resolved = BTreeMap::new();

    for (name, source) in sources {
        let value = match source {
            AttributeSource::Literal(value) => value.clone(),
            AttributeSource::Env { env: var } => match env.var(var) {
                Some(value) => Value::String(value),
                None => {
                    debug!(attribute = %name, env_var = %var, "attribute env var unset, skipping");
                    continue;
                }
            },
            AttributeSource::Computed { computed, args } => {
                let function = functions
                    .get(computed)
                    .ok_or_else(|| ConfigError::UnknownAttributeFunction(computed.clone()))?;
                function(args)
            }
        };
        resolved.insert(name.clone(), value);
    }

    Ok(resolved)
}
