/// Deployment Manager resource payloads (`deploymentmanager.v2beta`)

pub mod type_provider;

pub use type_provider::{
    InputMapping, MappingLocation, SchemaValidation, TypeProviderOptions, TypeProviderSpec,
    ValidationOptions,
};

/// Resource type of an API type provider
pub const TYPE_PROVIDER_TYPE: &str = "deploymentmanager.v2beta.typeProvider";
