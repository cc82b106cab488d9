//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit_path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::resolve_path(explicit_path)?;
            init_config(&path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }

    Ok(())
}

/// Write the default configuration to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(path)
}
