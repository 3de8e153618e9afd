//! Network template: a custom-mode VPC network and its regional subnetworks

use crate::template::{self, Template};
use crate::{Context, Environment, Result};
use dm_api::compute::{NetworkSpec, SubnetworkSpec, NETWORK_TYPE, SUBNETWORK_TYPE};
use dm_api::reference::reference;
use dm_api::{Document, Resource};
use ipnetwork::IpNetwork;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Properties read by the network template
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkProperties {
    /// Subnetworks to create, one per entry
    pub subnetworks: Vec<SubnetworkEntry>,
}

/// One subnetwork of the network
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubnetworkEntry {
    /// Base name; the region is appended to form the resource name
    pub name: String,

    /// Region of the subnetwork (e.g., "us-east1")
    pub region: String,

    /// Primary IP range (e.g., "10.0.0.0/24")
    pub cidr: String,
}

impl SubnetworkEntry {
    /// Resource name, unique per region even when names repeat
    pub fn resource_name(&self) -> String {
        format!("{}-{}", self.name, self.region)
    }
}

pub struct NetworkTemplate;

impl Template for NetworkTemplate {
    const NAME: &'static str = "network";
    type Properties = NetworkProperties;

    fn generate(env: &Environment, properties: &NetworkProperties) -> Document {
        let network_name = env.name.as_str();
        let mut document = Document::new();

        document.push_resource(Resource::new(
            network_name,
            NETWORK_TYPE,
            NetworkSpec::custom(network_name),
        ));

        for subnetwork in &properties.subnetworks {
            document.push_resource(subnetwork_resource(network_name, subnetwork));
        }

        document
    }
}

/// Generate the network document for a context
pub fn generate_config(context: &Context) -> Result<Document> {
    template::generate_config::<NetworkTemplate>(context)
}

fn subnetwork_resource(network_name: &str, subnetwork: &SubnetworkEntry) -> Resource {
    let name = subnetwork.resource_name();

    // The range is passed through as written; the provider rejects bad ones.
    if subnetwork.cidr.parse::<IpNetwork>().is_err() {
        warn!(
            "Subnetwork {} has an unparseable CIDR range: {}",
            name, subnetwork.cidr
        );
    }
    debug!("Adding subnetwork {} ({}) to {}", name, subnetwork.cidr, network_name);

    let spec = SubnetworkSpec {
        name: name.clone(),
        description: format!("Subnetwork of {} in {}", network_name, subnetwork.region),
        ip_cidr_range: subnetwork.cidr.clone(),
        region: subnetwork.region.clone(),
        network: reference(network_name, "selfLink"),
    };

    Resource::new(name, SUBNETWORK_TYPE, spec).depends_on([network_name])
}
