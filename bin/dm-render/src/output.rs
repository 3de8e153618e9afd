//! Document output formats

use anyhow::Result;
use clap::ValueEnum;
use dm_api::Document;
use schemars::schema::RootSchema;
use std::io::Write;

/// Serialization format of rendered documents
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

/// Write `document` in the requested format
pub fn write<W: Write>(out: &mut W, document: &Document, format: Format) -> Result<()> {
    match format {
        Format::Yaml => serde_yaml::to_writer(&mut *out, document)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, document)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write a JSON Schema
pub fn write_schema<W: Write>(out: &mut W, schema: &RootSchema) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, schema)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::{network, Context, Environment};
    use serde_json::json;

    fn document() -> Document {
        let context = Context::new(
            Environment::new("prod", "net1"),
            json!({"subnetworks": [{"name": "sub1", "region": "us-east1", "cidr": "10.0.0.0/24"}]}),
        );
        network::generate_config(&context).unwrap()
    }

    #[test]
    fn test_yaml_output_reads_back() {
        let mut buf = Vec::new();
        write(&mut buf, &document(), Format::Yaml).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("autoCreateSubnetworks: false"));
        assert!(text.contains("dependsOn:"));

        let parsed: Document = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, document());
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write(&mut buf, &document(), Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["resources"][1]["properties"]["ipCidrRange"], "10.0.0.0/24");
        assert!(value.get("outputs").is_none());
    }

    #[test]
    fn test_schema_output() {
        let mut buf = Vec::new();
        write_schema(&mut buf, &dm_core::TemplateKind::Network.schema()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["title"], "NetworkProperties");
    }
}
