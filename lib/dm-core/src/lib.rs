//! Deployment templates and document tooling
//!
//! This library provides:
//! - The network and cluster templates that turn a Context into a Document
//! - Document validation (unique names, dependencies, references)
//! - Expansion of deployment configs that mix template and plain resources

pub mod cluster;
pub mod config;
pub mod context;
pub mod error;
pub mod network;
pub mod template;
pub mod validate;

pub use cluster::ClusterTemplate;
pub use config::DeploymentConfig;
pub use context::{Context, Environment};
pub use error::{Result, TemplateError};
pub use network::NetworkTemplate;
pub use template::{Template, TemplateKind};
pub use validate::validate_document;
