// src/config/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::SeedConfig;
use crate::error::ConfigError;

type Result<T> = std::result::Result<T, ConfigError>;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{-?\s*\.?[A-Za-z0-9_.]*\s*-?\}\}").expect("placeholder regex is valid"));

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &SeedConfig) -> Result<()> {
        debug!("Starting configuration validation");

        if let Err(e) = Self::validate_linking(config) {
            warn!("Linking validation failed: {}", e);
            return Err(e);
        }
        debug!("Linking validation passed");

        if let Err(e) = Self::validate_matching(config) {
            warn!("Matching validation failed: {}", e);
            return Err(e);
        }
        debug!("Matching validation passed");

        if let Err(e) = Self::validate_endpoints(config) {
            warn!("Endpoint validation failed: {}", e);
            return Err(e);
        }
        debug!("Endpoint validation passed");

        debug!("Configuration validation completed successfully");
        Ok(())
    }

    fn validate_linking(config: &SeedConfig) -> Result<()> {
        Self::require_non_empty("linkCategory", &config.link_category)?;

        if config.link_dirs.is_empty() {
            return Err(ConfigError::invalid_field(
                "linkDirs",
                "at least one link directory must be configured",
            ));
        }

        for dir in &config.link_dirs {
            if !dir.is_absolute() {
                return Err(ConfigError::invalid_field(
                    "linkDirs",
                    format!("{} is not an absolute path", dir.display()),
                ));
            }
        }

        if let Some(dir) = &config.output_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::invalid_field(
                    "outputDir",
                    format!("{} is not an absolute path", dir.display()),
                ));
            }
        }

        debug!("Validated {} link directories", config.link_dirs.len());
        Ok(())
    }

    fn validate_matching(config: &SeedConfig) -> Result<()> {
        let ratio = config.season_from_episodes;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::invalid_field(
                "seasonFromEpisodes",
                format!("{ratio} is outside 0.0-1.0"),
            ));
        }

        Ok(())
    }

    fn validate_endpoints(config: &SeedConfig) -> Result<()> {
        Self::validate_http_url("qbittorrentUrl", &config.qbittorrent_url)?;
        let url = &config.qbittorrent_url;
        if url.username().is_empty() || url.password().map_or(true, str::is_empty) {
            return Err(ConfigError::invalid_field(
                "qbittorrentUrl",
                "URL must embed the qBittorrent username and password",
            ));
        }

        for (field, urls) in [
            ("radarr", &config.radarr),
            ("sonarr", &config.sonarr),
            ("torznab", &config.torznab),
        ] {
            for (index, url) in urls.iter().enumerate() {
                Self::validate_api_url(field, index, url)?;
            }
        }

        if config.torznab.is_empty() {
            return Err(ConfigError::invalid_field(
                "torznab",
                "at least one Torznab indexer must be configured",
            ));
        }

        debug!(
            radarr = config.radarr.len(),
            sonarr = config.sonarr.len(),
            torznab = config.torznab.len(),
            "Validated endpoint URLs"
        );
        Ok(())
    }

    /// Reject template values the deployment tooling left unsubstituted.
    pub fn ensure_resolved(field: &str, value: &Value) -> Result<()> {
        match value {
            Value::String(s) if PLACEHOLDER.is_match(s) => Err(ConfigError::invalid_field(
                field,
                "contains an unresolved template placeholder",
            )),
            Value::Array(items) => items.iter().try_for_each(|v| Self::ensure_resolved(field, v)),
            Value::Object(map) => map.values().try_for_each(|v| Self::ensure_resolved(field, v)),
            _ => Ok(()),
        }
    }

    pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::invalid_field(field, "must not be empty"));
        }
        Ok(())
    }

    pub fn parse_url(field: &str, raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim()).map_err(|e| {
            ConfigError::invalid_field(field, format!("invalid URL: {e}"))
        })?;
        Self::validate_http_url(field, &url)?;
        Ok(url)
    }

    fn validate_http_url(field: &str, url: &Url) -> Result<()> {
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(()),
            "http" | "https" => Err(ConfigError::invalid_field(field, "URL has no host")),
            scheme => Err(ConfigError::invalid_field(
                field,
                format!("unsupported scheme '{scheme}', expected http or https"),
            )),
        }
    }

    fn validate_api_url(field: &str, index: usize, url: &Url) -> Result<()> {
        Self::validate_http_url(field, url)?;

        let has_key = url
            .query_pairs()
            .any(|(k, v)| k == "apikey" && !v.trim().is_empty());
        if !has_key {
            return Err(ConfigError::invalid_field(
                field,
                format!("entry {index} is missing a non-empty apikey query parameter"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_detection() {
        assert!(ConfigValidator::ensure_resolved("apiKey", &json!("{{ .CROSS_SEED_API_KEY }}")).is_err());
        assert!(ConfigValidator::ensure_resolved("radarr", &json!(["https://r/?apikey={{.RADARR_API_KEY}}"])).is_err());
        assert!(ConfigValidator::ensure_resolved("apiKey", &json!("abc{d}")).is_ok());
        assert!(ConfigValidator::ensure_resolved("delay", &json!(30)).is_ok());
    }

    #[test]
    fn test_parse_url_rejects_bad_scheme_and_syntax() {
        let err = ConfigValidator::parse_url("radarr", "ftp://radarr.example.com").unwrap_err();
        assert_eq!(err.field(), "radarr");
        assert!(ConfigValidator::parse_url("radarr", "not a url").is_err());
        assert!(ConfigValidator::parse_url("radarr", "https://radarr.example.com/?apikey=k").is_ok());
    }

    #[test]
    fn test_api_url_requires_apikey() {
        let url = Url::parse("https://sonarr.example.com/").unwrap();
        let err = ConfigValidator::validate_api_url("sonarr", 0, &url).unwrap_err();
        assert_eq!(err.field(), "sonarr");

        let url = Url::parse("https://sonarr.example.com/?apikey=").unwrap();
        assert!(ConfigValidator::validate_api_url("sonarr", 0, &url).is_err());

        let url = Url::parse("https://sonarr.example.com/?apikey=secret").unwrap();
        assert!(ConfigValidator::validate_api_url("sonarr", 0, &url).is_ok());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(ConfigValidator::require_non_empty("linkCategory", "  ").is_err());
        assert!(ConfigValidator::require_non_empty("linkCategory", "cross-seed").is_ok());
    }
}
