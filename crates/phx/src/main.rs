//! PHX exporter
//!
//! Reads a building-energy model from JSON and writes it as a WUFI-Passive
//! project file.

mod config;
mod output;

use anyhow::Context;
use clap::Parser;
use phx_model::Project;
use phx_wufi::to_wufi_xml_string_with;
use tracing::info;

use crate::config::ExportConfig;
use crate::output::write_with_fallback;

/// Initializes the tracing subscriber. `RUST_LOG` takes precedence over
/// `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "phx={level},phx_wufi={level},phx_serde={level},phx_model={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = ExportConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let output = config.output_path();
    info!(
        input = %config.input.display(),
        output = %output.display(),
        indent = config.indent,
        "Starting export"
    );

    let project = Project::from_json_file(&config.input)
        .with_context(|| format!("Failed to load model {}", config.input.display()))?;

    let xml = to_wufi_xml_string_with(&project, &config.xml_options())
        .context("Failed to serialize project")?;

    let written = write_with_fallback(&output, &xml)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(path = %written.display(), "Export finished");
    Ok(())
}
