use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Network properties - a VPC network in custom subnet mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkSpec {
    /// Name of the network
    pub name: String,

    /// Whether the provider creates one subnetwork per region on its own
    pub auto_create_subnetworks: bool,
}

impl NetworkSpec {
    /// Network whose subnetworks are all declared explicitly
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_create_subnetworks: false,
        }
    }
}
