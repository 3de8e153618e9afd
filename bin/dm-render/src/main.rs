use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dm_api::Document;
use dm_core::{config, validate_document, Context, DeploymentConfig, TemplateKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

use output::Format;

/// Render deployment templates into resource documents
#[derive(Parser, Debug)]
#[command(name = "dm-render", version)]
#[command(about = "Render network and cluster deployment templates")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one template against a context file
    Render {
        /// Template to run (network or cluster)
        #[arg(short, long)]
        template: TemplateKind,

        /// Context file with `env` and `properties`
        #[arg(short, long)]
        context: PathBuf,

        #[arg(short, long, value_enum, env = "DM_RENDER_FORMAT", default_value_t = Format::Yaml)]
        format: Format,
    },

    /// Expand every template resource of a deployment config
    Expand {
        /// Deployment config file
        #[arg(short, long)]
        config: PathBuf,

        /// Deployment name used to prefix generated resources
        #[arg(short, long, env = "DM_DEPLOYMENT")]
        deployment: String,

        #[arg(short, long, value_enum, env = "DM_RENDER_FORMAT", default_value_t = Format::Yaml)]
        format: Format,
    },

    /// Validate a rendered document
    Check {
        /// Document file (YAML or JSON)
        document: PathBuf,
    },

    /// Print the JSON Schema of a template's properties
    Schema {
        #[arg(short, long)]
        template: TemplateKind,
    },
}

fn main() -> Result<()> {
    // stdout carries the rendered document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Render {
            template,
            context: path,
            format,
        } => {
            let input = read(&path)?;
            let context = Context::from_yaml(&input)
                .with_context(|| format!("Failed to parse context {}", path.display()))?;
            let document = template
                .generate(&context)
                .with_context(|| format!("Template {} failed", template))?;
            output::write(&mut out, &document, format)?;
        }
        Command::Expand {
            config: path,
            deployment,
            format,
        } => {
            let input = read(&path)?;
            let parsed = DeploymentConfig::from_yaml(&input)
                .with_context(|| format!("Failed to parse config {}", path.display()))?;
            let document = config::expand(&parsed, &deployment)
                .with_context(|| format!("Failed to expand {}", path.display()))?;
            output::write(&mut out, &document, format)?;
        }
        Command::Check { document } => {
            let input = read(&document)?;
            let parsed: Document = serde_yaml::from_str(&input)
                .with_context(|| format!("Failed to parse document {}", document.display()))?;
            validate_document(&parsed)
                .with_context(|| format!("Document {} is invalid", document.display()))?;
            info!(
                "Document {} is valid ({} resources, {} outputs)",
                document.display(),
                parsed.resources.len(),
                parsed.outputs.len()
            );
        }
        Command::Schema { template } => {
            output::write_schema(&mut out, &template.schema())?;
        }
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
