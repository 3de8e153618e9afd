use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Invalid properties for template {template}: {source}")]
    InvalidProperties {
        template: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate resource name: {0}")]
    DuplicateResource(String),

    #[error("Duplicate output name: {0}")]
    DuplicateOutput(String),

    #[error("Resource {resource} depends on unknown resource {dependency}")]
    UnknownDependency { resource: String, dependency: String },

    #[error("{owner} references unknown resource {target}")]
    UnresolvedReference { owner: String, target: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
