use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// TypeProvider properties - exposes an OpenAPI-described API to the
/// provisioning engine as resource types
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeProviderSpec {
    /// Request options applied to every call through this provider
    pub options: TypeProviderOptions,

    /// URL of the API descriptor (swagger document)
    pub descriptor_url: String,
}

/// Options for calls made through a type provider
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeProviderOptions {
    /// Schema validation behaviour
    pub validation_options: ValidationOptions,

    /// Values injected into requests
    #[serde(default)]
    pub input_mappings: Vec<InputMapping>,
}

/// Validation options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationOptions {
    pub schema_validation: SchemaValidation,
}

/// How schema mismatches in resource properties are handled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaValidation {
    /// Mismatches fail the deployment
    Fail,
    /// Mismatches are reported as warnings
    IgnoreWithWarnings,
    /// Mismatches are ignored
    Ignore,
}

/// Maps a value into an outgoing API request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputMapping {
    /// Field (or header) that receives the value
    pub field_name: String,

    /// Part of the request the field lives in
    pub location: MappingLocation,

    /// Regex over HTTP methods; all methods when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_match: Option<String>,

    /// Engine expression producing the value
    pub value: String,
}

/// Request location of an input mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MappingLocation {
    Path,
    Query,
    Body,
    Header,
}
