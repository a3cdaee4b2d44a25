//! Environment-based settings

use std::collections::HashMap;
use std::env;
use std::num::IntErrorKind;

use tracing::debug;

use crate::error::ConfigError;

/// Variable holding the port cross-seed's daemon listens on
pub const PORT_VAR: &str = "CROSS_SEED_PORT";

/// Settings that come from the process environment rather than the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub port: u16,
}

impl EnvironmentConfig {
    /// Extract environment settings from a raw variable mapping
    pub fn from_map(raw_env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw = raw_env
            .get(PORT_VAR)
            .ok_or_else(|| ConfigError::missing_env(PORT_VAR, "variable is not set"))?;

        let port = parse_port(raw.trim())?;
        debug!(env.var = PORT_VAR, config.port = port, "Port resolved from environment");
        Ok(Self { port })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(ConfigError::invalid_field(
                "port",
                format!("{raw} is outside 1-65535"),
            ));
        }
        Err(_) => {
            return Err(ConfigError::missing_env(
                PORT_VAR,
                format!("'{raw}' is not a number"),
            ));
        }
    };

    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::invalid_field("port", format!("{value} is outside 1-65535")))
}

/// Snapshot of the process environment, skipping non-UTF-8 entries
pub fn process_env() -> HashMap<String, String> {
    env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
