//! CLI Tooling
//!
//! Command-line interface for agentfetch operations. Commands are executed
//! against a loaded configuration and return their output as a string;
//! the binary prints it.

use crate::config::{AgentfetchConfig, ConfigLoader, CONFIG_FILE_NAME};
use crate::error::FetchError;
use crate::logging::LoggingConfig;
use crate::pipeline;
use crate::sink::JsonFileSink;
use crate::source::HttpSource;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Agentfetch CLI - compile remote agent definitions into an opencode catalog
#[derive(Parser)]
#[command(name = "agentfetch")]
#[command(about = "Fetch remote agent definitions and compile them into an opencode catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config lookup and relative output paths)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every document in the manifest and write the catalog
    Fetch {
        /// Base address documents are fetched from
        #[arg(long)]
        base_url: Option<String>,

        /// Catalog output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the effective document manifest
    Manifest {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a default agentfetch.toml to the workspace
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execution context holding the loaded configuration.
pub struct CliContext {
    workspace: PathBuf,
    config: AgentfetchConfig,
}

impl CliContext {
    pub fn new(workspace: PathBuf, config_path: Option<PathBuf>) -> Result<Self, FetchError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path),
            None => ConfigLoader::load(&workspace),
        }
        .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { workspace, config })
    }

    /// Build a context from an already-loaded configuration.
    pub fn with_config(workspace: PathBuf, config: AgentfetchConfig) -> Self {
        Self { workspace, config }
    }

    pub fn config(&self) -> &AgentfetchConfig {
        &self.config
    }

    /// Logging configuration with CLI overrides applied.
    pub fn logging_config(&self, level: Option<&str>, format: Option<&str>) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(level) = level {
            logging.level = level.to_string();
        }
        if let Some(format) = format {
            logging.format = format.to_string();
        }
        logging
    }

    /// Execute a command, returning its printable output.
    pub async fn execute(&self, command: &Commands) -> Result<String, FetchError> {
        match command {
            Commands::Fetch {
                base_url,
                output,
                timeout_secs,
                format,
            } => {
                self.execute_fetch(
                    base_url.as_deref(),
                    output.as_deref(),
                    *timeout_secs,
                    format,
                )
                .await
            }
            Commands::Manifest { format } => self.execute_manifest(format),
            Commands::Init { force } => self.execute_init(*force),
        }
    }

    async fn execute_fetch(
        &self,
        base_url: Option<&str>,
        output: Option<&Path>,
        timeout_secs: Option<u64>,
        format: &str,
    ) -> Result<String, FetchError> {
        validate_format(format)?;

        let base_url = base_url.unwrap_or(&self.config.base_url);
        let output = self.resolve_output(output.unwrap_or(&self.config.output));
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(self.config.timeout_secs));

        let source = HttpSource::with_timeout(base_url, timeout);
        let sink = JsonFileSink::new(output.clone());
        let (_, report) = pipeline::run(&self.config.manifest, &source, &sink).await?;

        if format == "json" {
            let summary = json!({
                "attempted": report.attempted,
                "collected": report.collected,
                "transport_failures": report.transport_failures,
                "format_failures": report.format_failures,
                "output": output.display().to_string(),
                "completed_at": chrono::Utc::now().to_rfc3339(),
            });
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            let skipped = report.transport_failures + report.format_failures;
            Ok(format!(
                "{} Created {} with {} agents ({} of {} skipped)",
                "✓".green(),
                output.display(),
                report.collected,
                skipped,
                report.attempted
            ))
        }
    }

    fn execute_manifest(&self, format: &str) -> Result<String, FetchError> {
        validate_format(format)?;

        if format == "json" {
            let listing = json!({
                "total": self.config.manifest.len(),
                "base_url": self.config.base_url,
                "documents": self.config.manifest,
            });
            Ok(serde_json::to_string_pretty(&listing)?)
        } else {
            Ok(self.config.manifest.join("\n"))
        }
    }

    fn execute_init(&self, force: bool) -> Result<String, FetchError> {
        let path = self.workspace.join(CONFIG_FILE_NAME);
        if path.exists() && !force {
            return Err(FetchError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let rendered = toml::to_string_pretty(&AgentfetchConfig::default())
            .map_err(|e| FetchError::Config(format!("failed to render default config: {}", e)))?;
        std::fs::write(&path, rendered)?;

        Ok(format!("{} Wrote {}", "✓".green(), path.display()))
    }

    fn resolve_output(&self, output: &Path) -> PathBuf {
        if output.is_absolute() {
            output.to_path_buf()
        } else {
            self.workspace.join(output)
        }
    }
}

fn validate_format(format: &str) -> Result<(), FetchError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(FetchError::Config(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
