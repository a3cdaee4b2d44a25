// src/config/app.rs

use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use crate::utils::secrets::redact_url;

/// What cross-seed does with a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Inject,
    Save,
    Test,
}

/// How matched data is linked into `linkDirs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Hardlink,
    Symlink,
    Reflink,
}

/// How strictly candidate torrents must match local data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Strict,
    Partial,
    #[serde(alias = "flexible")]
    Flex,
}

macro_rules! impl_display_via_serde_name {
    ($($ty:ty => { $($variant:ident => $name:literal),+ $(,)? }),+ $(,)?) => {
        $(
            impl $ty {
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $(Self::$variant => $name),+
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_via_serde_name! {
    Action => { Inject => "inject", Save => "save", Test => "test" },
    LinkType => { Hardlink => "hardlink", Symlink => "symlink", Reflink => "reflink" },
    MatchMode => { Strict => "strict", Partial => "partial", Flex => "flex" },
}

/// Validated cross-seed settings.
///
/// Only [`crate::config::ConfigLoader`] builds one, and nothing mutates it
/// afterwards. Serializing it yields the camelCase document cross-seed reads,
/// secrets included; `Debug` redacts them.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedConfig {
    pub(super) action: Action,
    #[serde(serialize_with = "serialize_secret")]
    pub(super) api_key: SecretString,
    pub(super) delay: u64,
    pub(super) duplicate_categories: bool,
    pub(super) flat_linking: bool,
    pub(super) include_non_videos: bool,
    pub(super) include_single_episodes: bool,
    pub(super) link_category: String,
    pub(super) link_dirs: Vec<PathBuf>,
    pub(super) link_type: LinkType,
    pub(super) match_mode: MatchMode,
    pub(super) season_from_episodes: f64,
    pub(super) output_dir: Option<PathBuf>,
    pub(super) port: u16,
    pub(super) qbittorrent_url: Url,
    pub(super) radarr: Vec<Url>,
    pub(super) sonarr: Vec<Url>,
    pub(super) torznab: Vec<Url>,
    pub(super) skip_recheck: bool,
    pub(super) use_client_torrents: bool,
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

impl SeedConfig {
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Seconds to wait between searches
    pub fn delay(&self) -> u64 {
        self.delay
    }

    pub fn duplicate_categories(&self) -> bool {
        self.duplicate_categories
    }

    pub fn flat_linking(&self) -> bool {
        self.flat_linking
    }

    pub fn include_non_videos(&self) -> bool {
        self.include_non_videos
    }

    pub fn include_single_episodes(&self) -> bool {
        self.include_single_episodes
    }

    pub fn link_category(&self) -> &str {
        &self.link_category
    }

    pub fn link_dirs(&self) -> &[PathBuf] {
        &self.link_dirs
    }

    pub fn link_type(&self) -> LinkType {
        self.link_type
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Fraction of a season's episodes that must be present to match a season pack
    pub fn season_from_episodes(&self) -> f64 {
        self.season_from_episodes
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn qbittorrent_url(&self) -> &Url {
        &self.qbittorrent_url
    }

    pub fn radarr(&self) -> &[Url] {
        &self.radarr
    }

    pub fn sonarr(&self) -> &[Url] {
        &self.sonarr
    }

    /// Torznab feeds in indexer priority order
    pub fn torznab(&self) -> &[Url] {
        &self.torznab
    }

    pub fn skip_recheck(&self) -> bool {
        self.skip_recheck
    }

    pub fn use_client_torrents(&self) -> bool {
        self.use_client_torrents
    }

    /// One line per setting, secrets redacted
    pub fn summary(&self) -> String {
        let urls = |list: &[Url]| {
            if list.is_empty() {
                "(none)".to_string()
            } else {
                list.iter().map(redact_url).collect::<Vec<_>>().join(", ")
            }
        };
        let dirs = self
            .link_dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        [
            format!("action: {}", self.action),
            format!("port: {}", self.port),
            format!("delay: {}s", self.delay),
            format!("matchMode: {}", self.match_mode),
            format!("seasonFromEpisodes: {}", self.season_from_episodes),
            format!("linkType: {}", self.link_type),
            format!("linkCategory: {}", self.link_category),
            format!("linkDirs: {dirs}"),
            format!(
                "outputDir: {}",
                self.output_dir
                    .as_ref()
                    .map_or_else(|| "(none)".to_string(), |d| d.display().to_string())
            ),
            format!("qbittorrentUrl: {}", redact_url(&self.qbittorrent_url)),
            format!("radarr: {}", urls(&self.radarr)),
            format!("sonarr: {}", urls(&self.sonarr)),
            format!("torznab: {}", urls(&self.torznab)),
        ]
        .join("\n")
    }
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact_all = |list: &[Url]| list.iter().map(redact_url).collect::<Vec<_>>();

        f.debug_struct("SeedConfig")
            .field("action", &self.action)
            .field("api_key", &"[REDACTED]")
            .field("delay", &self.delay)
            .field("duplicate_categories", &self.duplicate_categories)
            .field("flat_linking", &self.flat_linking)
            .field("include_non_videos", &self.include_non_videos)
            .field("include_single_episodes", &self.include_single_episodes)
            .field("link_category", &self.link_category)
            .field("link_dirs", &self.link_dirs)
            .field("link_type", &self.link_type)
            .field("match_mode", &self.match_mode)
            .field("season_from_episodes", &self.season_from_episodes)
            .field("output_dir", &self.output_dir)
            .field("port", &self.port)
            .field("qbittorrent_url", &redact_url(&self.qbittorrent_url))
            .field("radarr", &redact_all(&self.radarr))
            .field("sonarr", &redact_all(&self.sonarr))
            .field("torznab", &redact_all(&self.torznab))
            .field("skip_recheck", &self.skip_recheck)
            .field("use_client_torrents", &self.use_client_torrents)
            .finish()
    }
}

// Deployment defaults for settings the template may omit
pub(super) fn default_action() -> Action {
    Action::Inject
}

pub(super) fn default_delay() -> u64 {
    30
}

pub(super) fn default_link_category() -> String {
    "cross-seed".to_string()
}

pub(super) fn default_link_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/data/downloads/torrents/cross-seed"),
        PathBuf::from("/data/LaunchBox"),
    ]
}

pub(super) fn default_link_type() -> LinkType {
    LinkType::Hardlink
}

pub(super) fn default_match_mode() -> MatchMode {
    MatchMode::Partial
}

pub(super) fn default_season_from_episodes() -> f64 {
    0.8
}

pub const DEFAULT_QBITTORRENT_BASE_URL: &str = "https://qbittorrent.darkfellanetwork.com";
pub const DEFAULT_RADARR_BASE_URL: &str = "https://radarr.darkfellanetwork.com";
pub const DEFAULT_SONARR_BASE_URL: &str = "https://sonarr.darkfellanetwork.com";
pub const DEFAULT_PROWLARR_BASE_URL: &str = "https://prowlarr.darkfellanetwork.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names_match_serde() {
        assert_eq!(serde_json::to_value(Action::Inject).unwrap(), "inject");
        assert_eq!(serde_json::to_value(LinkType::Reflink).unwrap(), "reflink");
        assert_eq!(serde_json::to_value(MatchMode::Flex).unwrap(), "flex");
        assert_eq!(MatchMode::Flex.to_string(), "flex");
        assert_eq!(Action::Save.as_str(), "save");
    }

    #[test]
    fn test_match_mode_accepts_flexible_alias() {
        let mode: MatchMode = serde_json::from_value("flexible".into()).unwrap();
        assert_eq!(mode, MatchMode::Flex);
        assert!(serde_json::from_value::<MatchMode>("fuzzy".into()).is_err());
    }

    #[test]
    fn test_deployment_defaults() {
        assert_eq!(default_action(), Action::Inject);
        assert_eq!(default_delay(), 30);
        assert_eq!(default_link_dirs().len(), 2);
        assert!(default_link_dirs().iter().all(|d| d.is_absolute()));
        assert_eq!(default_match_mode(), MatchMode::Partial);
        assert!((default_season_from_episodes() - 0.8).abs() < f64::EPSILON);
    }
}
