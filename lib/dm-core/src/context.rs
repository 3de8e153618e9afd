//! Template input context

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context handed to a template: deployment metadata plus user properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Deployment scoped metadata
    pub env: Environment,

    /// User supplied properties, decoded by each template
    #[serde(default = "empty_properties")]
    pub properties: Value,
}

/// Deployment metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Deployment identifier
    pub deployment: String,

    /// Name of the resource (module) being expanded
    pub name: String,

    /// Project the deployment belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl Environment {
    pub fn new(deployment: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            deployment: deployment.into(),
            name: name.into(),
            project: None,
        }
    }
}

impl Context {
    pub fn new(env: Environment, properties: Value) -> Self {
        Self { env, properties }
    }

    /// Parse a context file (`env` and `properties` keys)
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

fn empty_properties() -> Value {
    Value::Object(Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_context_file() {
        let context = Context::from_yaml(
            r#"
env:
  deployment: prod
  name: net1
  project: my-project
properties:
  subnetworks:
    - name: sub1
      region: us-east1
      cidr: 10.0.0.0/24
"#,
        )
        .unwrap();

        assert_eq!(context.env.deployment, "prod");
        assert_eq!(context.env.name, "net1");
        assert_eq!(context.env.project.as_deref(), Some("my-project"));
        assert_eq!(context.properties["subnetworks"][0]["cidr"], "10.0.0.0/24");
    }

    #[test]
    fn test_missing_properties_default_to_empty_map() {
        let context = Context::from_yaml("env: {deployment: prod, name: app}").unwrap();
        assert_eq!(context.properties, json!({}));
        assert!(context.env.project.is_none());
    }

    #[test]
    fn test_missing_env_key_fails() {
        assert!(Context::from_yaml("env: {name: app}").is_err());
    }
}
