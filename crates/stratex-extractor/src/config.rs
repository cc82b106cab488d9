//! Configuration for the Extractor

use crate::prompt::PromptConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "qwen3:8b";

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Model identifier passed to the LLM runtime
    pub model: String,

    /// Maximum chunk size (characters)
    pub chunk_size: usize,

    /// Leading markers stripped from answer lines
    pub bullet_markers: Vec<String>,

    /// Maximum time for a single LLM call (seconds); unset waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_timeout_secs: Option<u64>,

    /// Prompt settings
    pub prompt: PromptConfig,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Option<Duration> {
        self.extraction_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.bullet_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("bullet_markers must not contain blank markers".to_string());
        }
        if self.extraction_timeout_secs == Some(0) {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if let Some(template) = &self.prompt.template {
            if !template.contains("{text}") {
                return Err("prompt.template must contain the {text} placeholder".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            bullet_markers: vec!["•".to_string(), "-".to_string()],
            extraction_timeout_secs: None,
            prompt: PromptConfig::default(),
        }
    }
}
