/// Compute Engine resource payloads (`compute.v1`)

pub mod network;
pub mod subnetwork;

pub use network::NetworkSpec;
pub use subnetwork::SubnetworkSpec;

/// Resource type of a VPC network
pub const NETWORK_TYPE: &str = "compute.v1.network";
/// Resource type of a regional subnetwork
pub const SUBNETWORK_TYPE: &str = "compute.v1.subnetwork";
