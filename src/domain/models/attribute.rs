//! Automatic attribute sources.

use serde::{Deserialize, Serialize};

/// How an automatic attribute obtains its value.
///
/// In the manifest:
///
/// ```yaml
/// automatic_attributes:
///   team: checkout              # literal
///   aws_region: { env: AWS_REGION }
///   build: { computed: join, args: ["-", "web", "42"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeSource {
    /// Read the named environment variable at startup.
    Env {
        /// Variable name.
        env: String,
    },
    /// Call a registered attribute function once at startup.
    Computed {
        /// Registered function name.
        computed: String,
        /// Arguments passed to the function.
        #[serde(default)]
        args: Vec<String>,
    },
    /// Use the value as written.
    Literal(serde_json::Value),
}

impl AttributeSource {
    /// Attribute read from environment variable `name`.
    pub fn env(name: impl Into<String>) -> Self {
        Self::Env { env: name.into() }
    }

    /// Attribute produced by calling `function` with `args`.
    pub fn computed<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Computed {
            computed: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Attribute with a fixed value.
    pub fn literal(value: impl Into<serde_json::Value>) -> Self {
        Self::Literal(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_each_variant() {
        let env: AttributeSource = serde_json::from_value(json!({"env": "AWS_REGION"})).unwrap();
        assert_eq!(env, AttributeSource::env("AWS_REGION"));

        let computed: AttributeSource =
            serde_json::from_value(json!({"computed": "concat", "args": ["a", "b"]})).unwrap();
        assert_eq!(computed, AttributeSource::computed("concat", ["a", "b"]));

        let no_args: AttributeSource =
            serde_json::from_value(json!({"computed": "agent_version"})).unwrap();
        assert_eq!(
            no_args,
            AttributeSource::computed("agent_version", Vec::<String>::new())
        );

        let literal: AttributeSource = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(literal, AttributeSource::literal(42));
    }
}
