//! Template trait and lookup

use crate::{ClusterTemplate, Context, Environment, NetworkTemplate, Result, TemplateError};
use dm_api::Document;
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// A template turns typed properties into a document of resources
pub trait Template {
    /// Name the template is known by in deployment configs
    const NAME: &'static str;

    /// Properties the template reads from the context
    type Properties: DeserializeOwned + JsonSchema;

    /// Build the document. Must be a pure function of its inputs.
    fn generate(env: &Environment, properties: &Self::Properties) -> Document;
}

/// Decode the context properties for `T` and run it
pub fn generate_config<T: Template>(context: &Context) -> Result<Document> {
    let properties = <T::Properties as Deserialize>::deserialize(&context.properties)
        .map_err(|source| TemplateError::InvalidProperties {
            template: T::NAME,
            source,
        })?;

    let document = T::generate(&context.env, &properties);
    info!(
        "Generated {} resources and {} outputs from {} template for {}/{}",
        document.resources.len(),
        document.outputs.len(),
        T::NAME,
        context.env.deployment,
        context.env.name
    );

    Ok(document)
}

/// JSON Schema of the properties `T` accepts
pub fn properties_schema<T: Template>() -> RootSchema {
    schemars::schema_for!(T::Properties)
}

/// Templates available to the tooling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    Network,
    Cluster,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Network, TemplateKind::Cluster];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Network => NetworkTemplate::NAME,
            TemplateKind::Cluster => ClusterTemplate::NAME,
        }
    }

    /// Resolve a resource type from a deployment config, if it names a template.
    ///
    /// Accepts the bare name, the template file name (`network.py`) or a path
    /// to it (`templates/network.py`).
    pub fn from_type(type_name: &str) -> Option<Self> {
        let file = type_name.rsplit('/').next().unwrap_or(type_name);
        let stem = file
            .strip_suffix(".py")
            .or_else(|| file.strip_suffix(".jinja"))
            .unwrap_or(file);

        let kind = TemplateKind::ALL.into_iter().find(|k| k.name() == stem);
        debug!("Resolved type {} to template {:?}", type_name, kind);
        kind
    }

    /// Run the template against a context
    pub fn generate(&self, context: &Context) -> Result<Document> {
        match self {
            TemplateKind::Network => generate_config::<NetworkTemplate>(context),
            TemplateKind::Cluster => generate_config::<ClusterTemplate>(context),
        }
    }

    /// JSON Schema of the template's properties
    pub fn schema(&self) -> RootSchema {
        match self {
            TemplateKind::Network => properties_schema::<NetworkTemplate>(),
            TemplateKind::Cluster => properties_schema::<ClusterTemplate>(),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateKind::from_type(s).ok_or_else(|| TemplateError::UnknownTemplate(s.to_string()))
    }
}
