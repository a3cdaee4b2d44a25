//! Torznab feed construction from Prowlarr indexer IDs

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::config::ConfigValidator;
use crate::error::ConfigError;

/// Prowlarr indexer IDs used when the template names none, highest priority first
pub const DEFAULT_INDEXER_IDS: [u32; 3] = [3, 1, 2];

/// One `torznab` template entry: a Prowlarr indexer ID or a ready-made feed URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TorznabEntry {
    Indexer(u32),
    Url(String),
}

/// Map entries onto feed URLs, keeping their order.
///
/// Indexer `id` becomes `<prowlarr_base>/<id>/api?apikey=<key>`.
pub fn build_torznab(
    entries: &[TorznabEntry],
    prowlarr_base: &Url,
    prowlarr_api_key: Option<&SecretString>,
) -> Result<Vec<Url>, ConfigError> {
    entries
        .iter()
        .map(|entry| match entry {
            TorznabEntry::Url(raw) => ConfigValidator::parse_url("torznab", raw),
            TorznabEntry::Indexer(id) => {
                let key = prowlarr_api_key.ok_or_else(|| {
                    ConfigError::invalid_field(
                        "prowlarrApiKey",
                        format!("required to build the feed for indexer {id}"),
                    )
                })?;
                indexer_feed(prowlarr_base, *id, key)
            }
        })
        .collect()
}

fn indexer_feed(base: &Url, id: u32, api_key: &SecretString) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| ConfigError::invalid_field("prowlarrBaseUrl", "URL cannot be a base"))?
        .pop_if_empty()
        .push(&id.to_string())
        .push("api");
    url.query_pairs_mut().append_pair("apikey", api_key.expose_secret());
    Ok(url)
}
