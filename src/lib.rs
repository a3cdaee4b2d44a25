// src/lib.rs

//! Typed loader and validator for the cross-seed deployment settings.
//!
//! [`ConfigLoader::load`] turns the raw environment and a resolved template
//! mapping into an immutable [`SeedConfig`]; [`config::render`] turns that
//! into the file the cross-seed daemon reads.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

use std::collections::HashMap;
use std::path::Path;

use tracing::{error, info};

pub use config::{ConfigLoader, SeedConfig};
pub use error::{AppError, ConfigError, ConfigErrorKind, Result};

/// Read the template at `template_path`, then load and validate it against `raw_env`.
pub fn run(template_path: &Path, raw_env: &HashMap<String, String>) -> Result<SeedConfig> {
    let template_display = template_path.display().to_string();
    info!(template.path = %template_display, "Loading cross-seed configuration");

    let template = config::read_template(template_path).map_err(|e| {
        error!(template.path = %template_display, error = %e, "Failed to read template");
        e
    })?;

    let seed_config = ConfigLoader::load(raw_env, &template).map_err(|e| {
        error!(
            template.path = %template_display,
            config.field = e.field(),
            error = %e,
            "Failed to load or validate configuration"
        );
        e
    })?;

    info!(
        config.action = %seed_config.action(),
        config.port = seed_config.port(),
        config.match_mode = %seed_config.match_mode(),
        config.link_type = %seed_config.link_type(),
        config.link_dirs = seed_config.link_dirs().len(),
        config.torznab = seed_config.torznab().len(),
        config.radarr = seed_config.radarr().len(),
        config.sonarr = seed_config.sonarr().len(),
        "Configuration loaded and validated successfully."
    );

    Ok(seed_config)
}
