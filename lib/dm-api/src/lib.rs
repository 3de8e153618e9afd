//! Deployment document model shared by the templates and the render tooling
//!
//! This library defines the declarative documents handed to the provisioning
//! engine:
//! - Document: the resources (and outputs) produced by one template run
//! - compute: Network and Subnetwork payloads
//! - container: managed Cluster payloads
//! - deploymentmanager: TypeProvider payloads for Kubernetes-style APIs
//! - reference: `$(ref.<name>.<field>)` expressions between resources

pub mod compute;
pub mod container;
pub mod deploymentmanager;
pub mod document;
pub mod reference;

pub use compute::{NetworkSpec, SubnetworkSpec};
pub use container::ClusterResourceSpec;
pub use deploymentmanager::TypeProviderSpec;
pub use document::{Document, Metadata, Output, Resource, ResourceProperties};
pub use reference::Reference;
