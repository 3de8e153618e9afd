//! Resource documents returned by templates

use crate::compute::{NetworkSpec, SubnetworkSpec};
use crate::container::ClusterResourceSpec;
use crate::deploymentmanager::TypeProviderSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Document is the result of one template run: the resources to realize and
/// the named values surfaced back to the caller
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// Resources in declaration order
    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Named results of the deployment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Output>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource
    pub fn push_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Append an output
    pub fn push_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    /// Move all resources and outputs of `other` to the end of this document
    pub fn extend(&mut self, other: Document) {
        self.resources.extend(other.resources);
        self.outputs.extend(other.outputs);
    }

    /// Look up a resource by name
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Look up an output by name
    pub fn output(&self, name: &str) -> Option<&Output> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Names of all resources, in declaration order
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.name.as_str())
    }
}

/// A single declarative unit of infrastructure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Resource {
    /// Name, unique within a document
    pub name: String,

    /// Resource kind (e.g., "compute.v1.network")
    #[serde(rename = "type")]
    pub type_name: String,

    /// Kind specific properties
    pub properties: ResourceProperties,

    /// Ordering constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        properties: impl Into<ResourceProperties>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            properties: properties.into(),
            metadata: None,
        }
    }

    /// Require the named resources to be realized before this one
    pub fn depends_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata
            .get_or_insert_with(Metadata::default)
            .depends_on
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Names this resource explicitly depends on
    pub fn dependencies(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map(|m| m.depends_on.as_slice())
            .unwrap_or(&[])
    }
}

/// Resource metadata
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Resources that must exist before this one is created
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Named value surfaced to the caller of a deployment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Output {
    pub name: String,
    pub value: String,
}

impl Output {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Properties of a resource, typed for the kinds the templates emit.
///
/// Variants are tried in order when reading a document back; anything that
/// does not match one of the known payloads exactly is kept as raw JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceProperties {
    TypeProvider(TypeProviderSpec),
    Cluster(ClusterResourceSpec),
    Subnetwork(SubnetworkSpec),
    Network(NetworkSpec),
    Other(serde_json::Value),
}

impl ResourceProperties {
    /// Properties as a JSON value
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<NetworkSpec> for ResourceProperties {
    fn from(spec: NetworkSpec) -> Self {
        ResourceProperties::Network(spec)
    }
}

impl From<SubnetworkSpec> for ResourceProperties {
    fn from(spec: SubnetworkSpec) -> Self {
        ResourceProperties::Subnetwork(spec)
    }
}

impl From<ClusterResourceSpec> for ResourceProperties {
    fn from(spec: ClusterResourceSpec) -> Self {
        ResourceProperties::Cluster(spec)
    }
}

impl From<TypeProviderSpec> for ResourceProperties {
    fn from(spec: TypeProviderSpec) -> Self {
        ResourceProperties::TypeProvider(spec)
    }
}

impl From<serde_json::Value> for ResourceProperties {
    fn from(value: serde_json::Value) -> Self {
        ResourceProperties::Other(value)
    }
}
