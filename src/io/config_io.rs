use std::fs;
use std::io;
use std::path::Path;

use crate::model::config::Config;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

const CONFIG_FILE: &str = "config.toml";

const CONFIG_TEMPLATE: &str = "\
# quad board configuration

[board]
# Hide done tasks on the board (they stay in tasks.json)
hide_done = false

# Display width for task titles (display only; titles are stored in full)
title_width = 32
";

/// Read `config.toml` from the data directory. A missing file yields the
/// default config; a malformed one is an error worth surfacing.
pub fn load_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

/// Write the commented default config, used by `qd init`. Leaves an
/// existing file alone.
pub fn write_default_config(data_dir: &Path) -> io::Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(data_dir)?;
    fs::write(path, CONFIG_TEMPLATE)
}
