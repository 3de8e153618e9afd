//! Cluster template: a managed Kubernetes cluster plus type providers that
//! expose its API to the provisioning engine

use crate::template::{self, Template};
use crate::{Context, Environment, Result};
use dm_api::container::{
    ClusterResourceSpec, ClusterSpec, IpAllocationPolicy, NodeConfig, CLUSTER_TYPE,
};
use dm_api::deploymentmanager::{
    InputMapping, MappingLocation, SchemaValidation, TypeProviderOptions, TypeProviderSpec,
    ValidationOptions, TYPE_PROVIDER_TYPE,
};
use dm_api::reference::reference;
use dm_api::{Document, Output, Resource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base URL shared by the node OAuth scopes
const OAUTH_SCOPE_BASE: &str = "https://www.googleapis.com/auth/";

/// Scopes granted to every node
const OAUTH_SCOPES: [&str; 4] = [
    "compute",
    "devstorage.read_only",
    "logging.write",
    "monitoring",
];

/// Kubernetes API roots exposed as type providers, as (name suffix, API path)
pub const K8S_ENDPOINTS: [(&str, &str); 2] = [
    ("", "api/v1"),
    ("-v1beta1-extensions", "apis/extensions/v1beta1"),
];

/// `metadata.name` of the resource when set, else the resource name
const METADATA_NAME_OR_RESOURCE_NAME: &str =
    "$.ifNull($.resource.properties.metadata.name, $.resource.name)";

const BEARER_ACCESS_TOKEN: &str = "$.concat(\"Bearer \",$.googleOauth2AccessToken())";

/// Properties read by the cluster template
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterProperties {
    /// Zone of the cluster
    pub zone: String,

    /// Network the nodes attach to
    pub network: String,

    /// Subnetwork the nodes attach to
    pub subnet: String,

    /// Node count of the default pool
    #[serde(rename = "initialNodeCount")]
    pub initial_node_count: u32,

    /// Kubernetes version
    pub cluster_version: String,

    /// Node image type
    pub image_type: String,

    /// Network tag applied to the nodes
    pub tags: String,

    /// Use alias IPs
    pub enable_ip_alias: bool,

    /// Pod range (CIDR)
    pub cluster_ipv4_cidr: String,

    /// Service range (CIDR)
    pub services_ipv4_cidr: String,
}

pub struct ClusterTemplate;

impl Template for ClusterTemplate {
    const NAME: &'static str = "cluster";
    type Properties = ClusterProperties;

    fn generate(env: &Environment, properties: &ClusterProperties) -> Document {
        let cluster_name = format!("{}-{}", env.deployment, env.name);
        let type_name = format!("{}-type", cluster_name);
        let mut document = Document::new();

        document.push_resource(Resource::new(
            &cluster_name,
            CLUSTER_TYPE,
            cluster_spec(&cluster_name, properties),
        ));

        for (suffix, api_path) in K8S_ENDPOINTS {
            let provider_name = format!("{}{}", type_name, suffix);
            debug!("Adding type provider {} for {}", provider_name, api_path);

            document.push_resource(Resource::new(
                &provider_name,
                TYPE_PROVIDER_TYPE,
                type_provider_spec(&cluster_name, api_path),
            ));
            document.push_output(Output::new(format!("clusterType{}", suffix), provider_name));
        }

        document
    }
}

/// Generate the cluster document for a context
pub fn generate_config(context: &Context) -> Result<Document> {
    template::generate_config::<ClusterTemplate>(context)
}

fn cluster_spec(cluster_name: &str, properties: &ClusterProperties) -> ClusterResourceSpec {
    ClusterResourceSpec {
        zone: properties.zone.clone(),
        cluster: ClusterSpec {
            name: cluster_name.to_string(),
            network: properties.network.clone(),
            subnetwork: properties.subnet.clone(),
            initial_node_count: properties.initial_node_count,
            initial_cluster_version: properties.cluster_version.clone(),
            node_config: NodeConfig {
                image_type: properties.image_type.clone(),
                tags: vec![properties.tags.clone()],
                oauth_scopes: OAUTH_SCOPES
                    .iter()
                    .map(|scope| format!("{}{}", OAUTH_SCOPE_BASE, scope))
                    .collect(),
            },
            ip_allocation_policy: IpAllocationPolicy {
                use_ip_aliases: properties.enable_ip_alias,
                cluster_ipv4_cidr: properties.cluster_ipv4_cidr.clone(),
                services_ipv4_cidr: properties.services_ipv4_cidr.clone(),
            },
        },
    }
}

fn type_provider_spec(cluster_name: &str, api_path: &str) -> TypeProviderSpec {
    TypeProviderSpec {
        options: TypeProviderOptions {
            // The Kubernetes API accepts ints in fields its schema marks as
            // strings, so mismatches only warn.
            validation_options: ValidationOptions {
                schema_validation: SchemaValidation::IgnoreWithWarnings,
            },
            input_mappings: input_mappings(),
        },
        descriptor_url: format!(
            "https://{}/swaggerapi/{}",
            reference(cluster_name, "endpoint"),
            api_path
        ),
    }
}

/// Request mappings shared by every Kubernetes type provider
fn input_mappings() -> Vec<InputMapping> {
    vec![
        // The `name` path parameter is the object's metadata.name
        InputMapping {
            field_name: "name".to_string(),
            location: MappingLocation::Path,
            method_match: Some("^(GET|DELETE|PUT)$".to_string()),
            value: METADATA_NAME_OR_RESOURCE_NAME.to_string(),
        },
        InputMapping {
            field_name: "metadata.name".to_string(),
            location: MappingLocation::Body,
            method_match: Some("^(PUT|POST)$".to_string()),
            value: METADATA_NAME_OR_RESOURCE_NAME.to_string(),
        },
        InputMapping {
            field_name: "Authorization".to_string(),
            location: MappingLocation::Header,
            method_match: None,
            value: BEARER_ACCESS_TOKEN.to_string(),
        },
    ]
}
