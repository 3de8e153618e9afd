use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Subnetwork properties - one regional IP range of a network
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubnetworkSpec {
    /// Name of the subnetwork
    pub name: String,

    /// Human readable description
    pub description: String,

    /// Primary IPv4 range (e.g., "10.0.0.0/24")
    pub ip_cidr_range: String,

    /// Region the subnetwork lives in (e.g., "us-east1")
    pub region: String,

    /// Parent network, usually a `$(ref.<network>.selfLink)` expression
    pub network: String,
}
