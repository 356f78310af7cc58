//! Exporter configuration.
//!
//! Every option can be given on the command line or through the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PHX_OUTPUT` | input with `.xml` | Output file |
//! | `PHX_LOG_LEVEL` | info | Log level |
//! | `PHX_XML_INDENT` | 2 | Indent width, `0` for a single line |
//! | `PHX_XML_INDENT_CHAR` | space | `space` or `tab` |

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use phx_serde::XmlOptions;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const MAX_INDENT: usize = 16;

/// Character used to indent nested elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndentChar {
    #[default]
    Space,
    Tab,
}

impl IndentChar {
    pub fn as_byte(self) -> u8 {
        match self {
            IndentChar::Space => b' ',
            IndentChar::Tab => b'\t',
        }
    }
}

/// Configuration for one export run.
#[derive(Debug, Clone, Parser)]
#[command(name = "phx")]
#[command(about = "Export a PHX building model as a WUFI-Passive project file")]
pub struct ExportConfig {
    /// Path to the JSON model.
    pub input: PathBuf,

    /// Output file. Defaults to the input path with an `.xml` extension.
    #[arg(short, long, env = "PHX_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PHX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Indent width per nesting level; 0 writes a single line.
    #[arg(long, env = "PHX_XML_INDENT", default_value = "2")]
    pub indent: usize,

    /// Indent character.
    #[arg(long, env = "PHX_XML_INDENT_CHAR", value_enum, default_value = "space")]
    pub indent_char: IndentChar,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            log_level: "info".to_string(),
            indent: 2,
            indent_char: IndentChar::Space,
        }
    }
}

impl ExportConfig {
    /// Where the document will be written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("xml"))
    }

    pub fn xml_options(&self) -> XmlOptions {
        XmlOptions {
            indent_char: self.indent_char.as_byte(),
            indent_size: self.indent,
            ..XmlOptions::default()
        }
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.input.as_os_str().is_empty() {
            errors.push("Input path cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Unknown log level {:?}, expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.indent > MAX_INDENT {
            errors.push(format!("Indent cannot exceed {}", MAX_INDENT));
        }

        if !self.input.as_os_str().is_empty() && self.output_path() == self.input {
            errors.push("Output path cannot be the input path".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
