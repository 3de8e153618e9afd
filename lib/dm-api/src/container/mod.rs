/// Kubernetes Engine resource payloads (`container.v1`)

pub mod cluster;

pub use cluster::{ClusterResourceSpec, ClusterSpec, IpAllocationPolicy, NodeConfig};

/// Resource type of a managed container cluster
pub const CLUSTER_TYPE: &str = "container.v1.cluster";
