// src/config/mod.rs

pub mod app;
pub mod environment;
pub mod indexers;
pub mod loader;
pub mod output;
pub mod validation;

pub use app::{Action, LinkType, MatchMode, SeedConfig};
pub use environment::{process_env, EnvironmentConfig, PORT_VAR};
pub use indexers::{TorznabEntry, DEFAULT_INDEXER_IDS};
pub use loader::{read_template, ConfigLoader};
pub use output::{render, save_config, OutputFormat};
pub use validation::ConfigValidator;
