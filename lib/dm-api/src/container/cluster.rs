use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cluster resource properties - the zone plus the cluster definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterResourceSpec {
    /// Zone the cluster is created in (e.g., "us-central1-a")
    pub zone: String,

    /// Cluster definition
    pub cluster: ClusterSpec,
}

/// Managed Kubernetes cluster
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterSpec {
    /// Name of the cluster
    pub name: String,

    /// Network the cluster nodes attach to
    pub network: String,

    /// Subnetwork the cluster nodes attach to
    pub subnetwork: String,

    /// Number of nodes in the default pool
    pub initial_node_count: u32,

    /// Kubernetes version of the control plane
    pub initial_cluster_version: String,

    /// Node configuration for the default pool
    pub node_config: NodeConfig,

    /// Alias IP configuration
    pub ip_allocation_policy: IpAllocationPolicy,
}

/// Node pool configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeConfig {
    /// Node image (e.g., "COS")
    pub image_type: String,

    /// Network tags applied to every node
    #[serde(default)]
    pub tags: Vec<String>,

    /// OAuth scopes granted to the node service account
    #[serde(default)]
    pub oauth_scopes: Vec<String>,
}

/// IP allocation policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IpAllocationPolicy {
    /// Use alias IPs for pods and services
    pub use_ip_aliases: bool,

    /// Pod range (CIDR)
    pub cluster_ipv4_cidr: String,

    /// Service range (CIDR)
    pub services_ipv4_cidr: String,
}
