//! Rendering a validated config into the file cross-seed reads

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::config::SeedConfig;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    /// CommonJS module, the shape of cross-seed's `config.js`
    Js,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Js => "js",
        })
    }
}

pub fn render(config: &SeedConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        OutputFormat::Js => {
            format!("module.exports = {};\n", serde_json::to_string_pretty(config)?)
        }
    };
    Ok(rendered)
}

/// Write the rendered config, replacing any existing file.
pub fn save_config(config: &SeedConfig, path: &Path, format: OutputFormat) -> Result<()> {
    let content = render(config, format)?;

    std::fs::write(path, content)
        .map_err(|e| AppError::io(format!("write_config {}", path.display()), &e))?;

    info!(output.path = %path.display(), output.format = %format, "Configuration saved");
    Ok(())
}
