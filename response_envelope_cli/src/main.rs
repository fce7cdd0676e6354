mod output;
mod wrap;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::output::OutputFormat;
use crate::wrap::WrapArgs;

/// Environment variable that turns on envelope diagnostics.
const DIAGNOSTICS_ENV: &str = "ENVELOPE_DIAGNOSTICS";

#[derive(Parser)]
#[command(name = "envelope")]
#[command(about = "Wrap JSON data in a response envelope with paging metadata")]
struct Cli {
    /// JSON file to wrap (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format: json or yaml
    #[arg(long, default_value = "json")]
    output: String,

    /// Log every envelope recomputation to stderr
    #[arg(long)]
    diagnostics: bool,

    #[command(flatten)]
    wrap: WrapArgs,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let diagnostics = cli.diagnostics || env_flag(DIAGNOSTICS_ENV);

    let directive = if diagnostics {
        "response_envelope=trace"
    } else {
        "response_envelope=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("envelope=info".parse()?)
                .add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = match cli.output.as_str() {
        "yaml" | "yml" => OutputFormat::Yaml,
        _ => OutputFormat::Json,
    };

    let text = read_input(cli.input.as_ref())?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("input is not valid JSON")?;

    let envelope = wrap::build_envelope(&cli.wrap, value, diagnostics)?;
    tracing::debug!(
        count = envelope.results().count,
        out_of_range = envelope.results().out_of_range,
        "wrapped input"
    );
    output::print_envelope(&envelope, &format)?;

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
