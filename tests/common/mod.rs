//! Common test utilities and fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

/// Test template builder, starting from the deployment's full settings
pub struct TemplateBuilder {
    template: Map<String, Value>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        let template = json!({
            "action": "inject",
            "apiKey": "abc",
            "delay": 30,
            "duplicateCategories": false,
            "flatLinking": false,
            "includeNonVideos": true,
            "includeSingleEpisodes": false,
            "linkCategory": "cross-seed",
            "linkDirs": ["/data/downloads/torrents/cross-seed", "/data/LaunchBox"],
            "linkType": "hardlink",
            "matchMode": "partial",
            "seasonFromEpisodes": 0.8,
            "outputDir": null,
            "qbittorrentUsername": "seeduser",
            "qbittorrentPassword": "seedpass",
            "radarrApiKey": "radarr-key",
            "sonarrApiKey": "sonarr-key",
            "prowlarrApiKey": "prowlarr-key",
            "skipRecheck": true,
            "useClientTorrents": true,
            "torznab": [3, 1, 2],
        });

        match template {
            Value::Object(template) => Self { template },
            _ => unreachable!(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.template.insert(key.to_string(), value);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.template.remove(key);
        self
    }

    pub fn build(self) -> Map<String, Value> {
        self.template
    }

    /// Write the template as YAML into `dir`
    pub fn write_yaml(self, dir: &Path) -> PathBuf {
        let path = dir.join("settings.yaml");
        let yaml = serde_yaml::to_string(&Value::Object(self.template)).unwrap();
        std::fs::write(&path, yaml).unwrap();
        path
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn env_with_port(port: &str) -> HashMap<String, String> {
    HashMap::from([("CROSS_SEED_PORT".to_string(), port.to_string())])
}
