//! Deployment configs: the user-authored list of resources, some of which are
//! expanded by templates

use crate::{validate_document, Context, Environment, Result, TemplateKind};
use dm_api::{Document, Metadata, Resource, ResourceProperties};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// A deployment config file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Template files made available to the resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,

    /// Resources, in declaration order
    #[serde(default)]
    pub resources: Vec<ConfigResource>,
}

/// An imported template file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub path: String,

    /// Alias the template is referenced by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A resource entry of a deployment config
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigResource {
    pub name: String,

    /// A template (e.g., "network.py") or a provider type
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default = "empty_properties")]
    pub properties: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ConfigResource {
    /// Resources this entry must be created after
    pub fn dependencies(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map(|m| m.depends_on.as_slice())
            .unwrap_or(&[])
    }
}

impl DeploymentConfig {
    /// Parse a deployment config file
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    fn is_imported(&self, type_name: &str) -> bool {
        self.imports.iter().any(|import| {
            import.path == type_name || import.name.as_deref() == Some(type_name)
        })
    }
}

/// Expand every template resource of `config` and merge the results, with
/// plain resources passed through as written. The merged document is
/// validated before it is returned.
pub fn expand(config: &DeploymentConfig, deployment: &str) -> Result<Document> {
    let mut document = Document::new();

    for entry in &config.resources {
        match TemplateKind::from_type(&entry.type_name) {
            Some(kind) => {
                if !config.imports.is_empty() && !config.is_imported(&entry.type_name) {
                    warn!(
                        "Resource {} uses template {} which is not listed in imports",
                        entry.name, entry.type_name
                    );
                }

                let context = Context::new(
                    Environment::new(deployment, &entry.name),
                    entry.properties.clone(),
                );
                let mut generated = kind.generate(&context)?;
                // Dependencies of a template entry hold for everything it expands to
                let dependencies = entry.dependencies();
                if !dependencies.is_empty() {
                    generated.resources = generated
                        .resources
                        .into_iter()
                        .map(|resource| resource.depends_on(dependencies.iter().cloned()))
                        .collect();
                }
                document.extend(generated);
            }
            None => {
                debug!("Passing through resource {} ({})", entry.name, entry.type_name);
                let mut resource = Resource::new(
                    &entry.name,
                    &entry.type_name,
                    ResourceProperties::Other(entry.properties.clone()),
                );
                resource.metadata = entry.metadata.clone();
                document.push_resource(resource);
            }
        }
    }

    validate_document(&document)?;
    info!(
        "Expanded {} config entries into {} resources for deployment {}",
        config.resources.len(),
        document.resources.len(),
        deployment
    );

    Ok(document)
}

fn empty_properties() -> Value {
    Value::Object(Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemplateError;
    use serde_json::json;

    const CONFIG: &str = r#"
imports:
  - path: network.py
  - path: cluster.py

resources:
  - name: net1
    type: network.py
    properties:
      subnetworks:
        - name: sub1
          region: us-central1
          cidr: 10.0.0.0/24
  - name: gke
    type: cluster.py
    properties:
      zone: us-central1-a
      network: net1
      subnet: sub1-us-central1
      initialNodeCount: 2
      cluster-version: 1.9.7-gke.0
      image-type: COS
      tags: gke-node
      enable-ip-alias: true
      cluster-ipv4-cidr: 10.4.0.0/14
      services-ipv4-cidr: 10.0.32.0/20
  - name: allow-ssh
    type: compute.v1.firewall
    properties:
      network: $(ref.net1.selfLink)
      sourceRanges: [0.0.0.0/0]
    metadata:
      dependsOn: [net1]
"#;

    #[test]
    fn test_expand_mixed_config() {
        let config = DeploymentConfig::from_yaml(CONFIG).unwrap();
        let doc = expand(&config, "prod").unwrap();

        assert_eq!(
            doc.resource_names().collect::<Vec<_>>(),
            vec![
                "net1",
                "sub1-us-central1",
                "prod-gke",
                "prod-gke-type",
                "prod-gke-type-v1beta1-extensions",
                "allow-ssh",
            ]
        );
        assert_eq!(doc.outputs.len(), 2);
        assert_eq!(doc.output("clusterType").unwrap().value, "prod-gke-type");
    }

    #[test]
    fn test_plain_resources_pass_through() {
        let config = DeploymentConfig::from_yaml(CONFIG).unwrap();
        let doc = expand(&config, "prod").unwrap();

        let firewall = doc.resource("allow-ssh").unwrap();
        assert_eq!(firewall.type_name, "compute.v1.firewall");
        assert_eq!(firewall.dependencies(), ["net1".to_string()]);
        assert_eq!(
            firewall.properties.to_value().unwrap(),
            json!({"network": "$(ref.net1.selfLink)", "sourceRanges": ["0.0.0.0/0"]})
        );
    }

    #[test]
    fn test_template_errors_propagate() {
        let config = DeploymentConfig::from_yaml(
            r#"
resources:
  - name: gke
    type: cluster.py
    properties:
      zone: us-central1-a
"#,
        )
        .unwrap();
        assert!(matches!(
            expand(&config, "prod"),
            Err(TemplateError::InvalidProperties { template: "cluster", .. })
        ));
    }

    #[test]
    fn test_conflicting_names_are_rejected() {
        let config = DeploymentConfig::from_yaml(
            r#"
resources:
  - name: net1
    type: network.py
    properties:
      subnetworks: []
  - name: net1
    type: compute.v1.network
    properties: {name: net1}
"#,
        )
        .unwrap();
        assert!(matches!(
            expand(&config, "prod"),
            Err(TemplateError::DuplicateResource(name)) if name == "net1"
        ));
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let config = DeploymentConfig::from_yaml(
            r#"
resources:
  - name: route
    type: compute.v1.route
    properties:
      network: $(ref.missing.selfLink)
"#,
        )
        .unwrap();
        assert!(matches!(
            expand(&config, "prod"),
            Err(TemplateError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_sample_deployment_config() {
        let config =
            DeploymentConfig::from_yaml(include_str!("../../../configs/deployment.yaml")).unwrap();
        let doc = expand(&config, "prod").unwrap();

        assert_eq!(doc.resources.len(), 5);
        assert_eq!(
            doc.output("clusterType-v1beta1-extensions").unwrap().value,
            "prod-app-type-v1beta1-extensions"
        );
    }

    #[test]
    fn test_template_dependencies_apply_to_generated_resources() {
        let config = DeploymentConfig::from_yaml(
            r#"
resources:
  - name: fw
    type: compute.v1.firewall
    properties: {name: fw}
  - name: net1
    type: network.py
    properties:
      subnetworks:
        - name: sub1
          region: us-east1
          cidr: 10.0.0.0/24
    metadata:
      dependsOn: [fw]
"#,
        )
        .unwrap();
        let doc = expand(&config, "prod").unwrap();

        assert_eq!(doc.resource("net1").unwrap().dependencies(), ["fw".to_string()]);
        assert_eq!(
            doc.resource("sub1-us-east1").unwrap().dependencies(),
            ["net1".to_string(), "fw".to_string()]
        );
    }

    #[test]
    fn test_two_clusters_collide_on_outputs() {
        let config = DeploymentConfig::from_yaml(&format!(
            "resources:\n{}{}",
            cluster_entry("a"),
            cluster_entry("b")
        ))
        .unwrap();
        assert!(matches!(
            expand(&config, "prod"),
            Err(TemplateError::DuplicateOutput(name)) if name == "clusterType"
        ));
    }

    fn cluster_entry(name: &str) -> String {
        format!(
            r#"  - name: {}
    type: cluster.py
    properties:
      zone: us-central1-a
      network: default
      subnet: default
      initialNodeCount: 1
      cluster-version: 1.9.7-gke.0
      image-type: COS
      tags: gke-node
      enable-ip-alias: false
      cluster-ipv4-cidr: 10.4.0.0/14
      services-ipv4-cidr: 10.0.32.0/20
"#,
            name
        )
    }
}
