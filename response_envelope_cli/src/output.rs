use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Serializes the envelope in the requested format.
pub fn render<T: Serialize>(envelope: &T, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(envelope).context("failed to serialize to JSON")
        }
        OutputFormat::Yaml => serde_yml::to_string(envelope).context("failed to serialize to YAML"),
    }
}

pub fn print_envelope<T: Serialize>(envelope: &T, format: &OutputFormat) -> Result<()> {
    println!("{}", render(envelope, format)?);
    Ok(())
}
