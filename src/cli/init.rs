//! Init command implementation

use std::path::PathBuf;

use anyhow::Result;

use annie::Config;

/// Write a fresh config file.
///
/// Defaults to the global config at `~/.annie/config.toml`; `--config`
/// picks another location.
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    Config::init_config_file(&config_path, force)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
