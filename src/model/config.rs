use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the data directory. Every field has a
/// default so a missing file yields a working config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Hide done tasks on the board (they stay in the data file)
    #[serde(default)]
    pub hide_done: bool,
    /// Display width for task titles; stored titles are never truncated
    #[serde(default = "default_title_width")]
    pub title_width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            hide_done: false,
            title_width: default_title_width(),
        }
    }
}

fn default_title_width() -> usize {
    32
}
