//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stratex_document::DEFAULT_MAX_FILE_SIZE;
use stratex_extractor::ExtractorConfig;
use stratex_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ollama connection
    #[serde(default)]
    pub ollama: OllamaSettings,

    /// Extraction pipeline
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Ollama connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaSettings {
    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP timeout per request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Largest document accepted, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON lines format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".stratex").join("config.toml"))
    }

    /// Resolve `explicit`, falling back to the default path.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit)?;

        if path.exists() {
            Self::load_from(&path)
        } else if explicit.is_some() {
            Err(CliError::Config(format!(
                "Config file '{}' does not exist",
                path.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.ollama.endpoint.trim().is_empty() {
            return Err(CliError::Config("ollama.endpoint must not be empty".into()));
        }
        if self.ollama.request_timeout_secs == 0 {
            return Err(CliError::Config(
                "ollama.request_timeout_secs must be greater than 0".into(),
            ));
        }
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("extractor: {}", e)))
    }
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}
