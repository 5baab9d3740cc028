//! Presentation settings
//!
//! Board size and win length are fixed; only how the board is drawn can be
//! configured. Settings come from a JSON file named by `OMOK_CONFIG`, every
//! field optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "OMOK_CONFIG";

const MIN_CELL_SIZE: f32 = 16.0;
const MAX_CELL_SIZE: f32 = 96.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side of one board cell in points
    pub cell_size: f32,
    pub window_title: String,
    pub show_last_move: bool,
    pub highlight_winning_line: bool,
    pub show_hover_preview: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            window_title: "Omok".to_string(),
            show_last_move: true,
            highlight_winning_line: true,
            show_hover_preview: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `OMOK_CONFIG` if set, defaults otherwise
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Self {
        if !self.cell_size.is_finite() {
            self.cell_size = Self::default().cell_size;
        }
        self.cell_size = self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self
    }
}
