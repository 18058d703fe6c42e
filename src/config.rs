//! Configuration loading.
//!
//! Precedence: defaults (lowest) -> global XDG config file -> workspace
//! `agentfetch.toml` -> AGENTFETCH_* environment variables (highest).
//! Environment variables use `__` as the separator for nested keys, e.g.
//! `AGENTFETCH_LOGGING__LEVEL=debug`.

use crate::logging::LoggingConfig;
use crate::manifest;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the workspace config file.
pub const CONFIG_FILE_NAME: &str = "agentfetch.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentfetchConfig {
    /// Base address each manifest entry is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Catalog output path, overwritten in full on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ordered list of documents to fetch.
    #[serde(default = "manifest::default_manifest")]
    pub manifest: Vec<String>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/wshobson/agents/main/".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("opencode.json")
}

fn default_timeout_secs() -> u64 {
    crate::source::DEFAULT_TIMEOUT_SECS
}

impl Default for AgentfetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output: default_output(),
            timeout_secs: default_timeout_secs(),
            manifest: manifest::default_manifest(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources rooted at `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<AgentfetchConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder.add_source(File::from(workspace_root.join(CONFIG_FILE_NAME)).required(false));
        let builder = Self::add_environment(builder);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<AgentfetchConfig, ConfigError> {
        let builder = Config::builder().add_source(File::from(path.to_path_buf()));
        let builder = Self::add_environment(builder);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Global config file path (~/.config/agentfetch/config.toml on Linux).
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "agentfetch", "agentfetch")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Add environment variable overlay to builder.
    /// Uses AGENTFETCH_ prefix and __ as separator for nested keys.
    fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix("AGENTFETCH")
                .separator("__")
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_upstream_catalog() {
        let config = AgentfetchConfig::default();
        assert_eq!(
            config.base_url,
            "https://raw.githubusercontent.com/wshobson/agents/main/"
        );
        assert_eq!(config.output, PathBuf::from("opencode.json"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.manifest.len(), manifest::DEFAULT_AGENT_FILES.len());
    }

    #[test]
    fn missing_workspace_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("opencode.json"));
        assert!(!config.manifest.is_empty());
    }

    #[test]
    fn workspace_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "base_url = \"https://example.com/agents/\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.base_url, "https://example.com/agents/");
        assert_eq!(config.timeout_secs, 5);
        // Unset keys keep their defaults.
        assert_eq!(config.output, PathBuf::from("opencode.json"));
    }

    #[test]
    fn explicit_file_can_replace_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "manifest = [\"one.md\", \"two.md\"]\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.manifest, vec!["one.md", "two.md"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigLoader::load_from_file(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = toml::to_string_pretty(&AgentfetchConfig::default()).unwrap();
        let parsed: AgentfetchConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.base_url, AgentfetchConfig::default().base_url);
        assert_eq!(parsed.manifest.len(), manifest::DEFAULT_AGENT_FILES.len());
    }
}
