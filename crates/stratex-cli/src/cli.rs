//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stratex - Extract strategic initiatives from reports with a local LLM.
#[derive(Debug, Parser)]
#[command(name = "stratex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STRATEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON lines, one object per document
    Json,
    /// Quiet format (bullets only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract items from a document or every document in a directory
    Analyze(AnalyzeArgs),

    /// Show how a document would be chunked, without calling the model
    Chunks(ChunksArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// PDF/text file, or directory of them
    pub path: PathBuf,

    /// Model to use (e.g., qwen3:8b)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum chunk size in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Ollama endpoint (e.g., http://localhost:11434)
    #[arg(short, long, env = "STRATEX_OLLAMA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Subject label, instead of the one derived from the file name (single file only)
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Give up on a chunk after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Arguments for the chunks command.
#[derive(Debug, Parser)]
pub struct ChunksArgs {
    /// PDF or text file
    pub path: PathBuf,

    /// Maximum chunk size in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "stratex",
            "analyze",
            "reports/",
            "--model",
            "llama3.1",
            "--chunk-size",
            "2000",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.path, PathBuf::from("reports/"));
                assert_eq!(args.model.as_deref(), Some("llama3.1"));
                assert_eq!(args.chunk_size, Some(2000));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stratex", "chunks", "a.pdf", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Chunks(_)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["stratex", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected config init"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["stratex"]).is_err());
    }
}
