//! Document validation

use crate::{Result, TemplateError};
use dm_api::reference::{references_in, references_in_value};
use dm_api::Document;
use std::collections::HashSet;
use tracing::debug;

/// Check that a document is internally consistent:
/// - resource names are unique, and so are output names
/// - every `dependsOn` entry names a resource of the document
/// - every `$(ref.<name>.<field>)` in properties or outputs names one too
///
/// Returns the first violation found.
pub fn validate_document(document: &Document) -> Result<()> {
    let mut names = HashSet::new();
    for resource in &document.resources {
        if !names.insert(resource.name.as_str()) {
            return Err(TemplateError::DuplicateResource(resource.name.clone()));
        }
    }

    for resource in &document.resources {
        for dependency in resource.dependencies() {
            if !names.contains(dependency.as_str()) {
                return Err(TemplateError::UnknownDependency {
                    resource: resource.name.clone(),
                    dependency: dependency.clone(),
                });
            }
        }

        let properties = resource.properties.to_value()?;
        for reference in references_in_value(&properties) {
            if !names.contains(reference.resource) {
                return Err(TemplateError::UnresolvedReference {
                    owner: format!("Resource {}", resource.name),
                    target: reference.resource.to_string(),
                });
            }
        }
    }

    let mut output_names = HashSet::new();
    for output in &document.outputs {
        if !output_names.insert(output.name.as_str()) {
            return Err(TemplateError::DuplicateOutput(output.name.clone()));
        }

        for reference in references_in(&output.value) {
            if !names.contains(reference.resource) {
                return Err(TemplateError::UnresolvedReference {
                    owner: format!("Output {}", output.name),
                    target: reference.resource.to_string(),
                });
            }
        }
    }

    debug!(
        "Validated document with {} resources and {} outputs",
        document.resources.len(),
        document.outputs.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_api::{Output, Resource};
    use serde_json::json;

    fn document(resources: Vec<Resource>) -> Document {
        Document {
            resources,
            outputs: Vec::new(),
        }
    }

    #[test]
    fn test_valid_document() {
        let doc = document(vec![
            Resource::new("net", "compute.v1.network", json!({"name": "net"})),
            Resource::new("sub", "compute.v1.subnetwork", json!({"network": "$(ref.net.selfLink)"}))
                .depends_on(["net"]),
        ]);
        validate_document(&doc).unwrap();
    }

    #[test]
    fn test_duplicate_names() {
        let doc = document(vec![
            Resource::new("net", "compute.v1.network", json!({})),
            Resource::new("net", "compute.v1.network", json!({})),
        ]);
        assert!(matches!(
            validate_document(&doc),
            Err(TemplateError::DuplicateResource(name)) if name == "net"
        ));
    }

    #[test]
    fn test_unknown_dependency() {
        let doc = document(vec![
            Resource::new("sub", "compute.v1.subnetwork", json!({})).depends_on(["net"]),
        ]);
        match validate_document(&doc) {
            Err(TemplateError::UnknownDependency { resource, dependency }) => {
                assert_eq!(resource, "sub");
                assert_eq!(dependency, "net");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_reference_in_properties() {
        let doc = document(vec![Resource::new(
            "provider",
            "deploymentmanager.v2beta.typeProvider",
            json!({"descriptorUrl": "https://$(ref.gke.endpoint)/swaggerapi/api/v1"}),
        )]);
        match validate_document(&doc) {
            Err(TemplateError::UnresolvedReference { owner, target }) => {
                assert_eq!(owner, "Resource provider");
                assert_eq!(target, "gke");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_reference_in_output() {
        let mut doc = document(vec![Resource::new("net", "compute.v1.network", json!({}))]);
        doc.push_output(Output::new("selfLink", "$(ref.net.selfLink)"));
        validate_document(&doc).unwrap();

        doc.push_output(Output::new("endpoint", "$(ref.gke.endpoint)"));
        assert!(matches!(
            validate_document(&doc),
            Err(TemplateError::UnresolvedReference { target, .. }) if target == "gke"
        ));
    }

    #[test]
    fn test_duplicate_output_names() {
        let mut doc = document(vec![
            Resource::new("a-type", "deploymentmanager.v2beta.typeProvider", json!({})),
            Resource::new("b-type", "deploymentmanager.v2beta.typeProvider", json!({})),
        ]);
        doc.push_output(Output::new("clusterType", "a-type"));
        doc.push_output(Output::new("clusterType", "b-type"));
        assert!(matches!(
            validate_document(&doc),
            Err(TemplateError::DuplicateOutput(name)) if name == "clusterType"
        ));
    }

    #[test]
    fn test_engine_expressions_are_not_references() {
        let doc = document(vec![Resource::new(
            "provider",
            "deploymentmanager.v2beta.typeProvider",
            json!({"value": "$.ifNull($.resource.properties.metadata.name, $.resource.name)"}),
        )]);
        validate_document(&doc).unwrap();
    }
}
