//! Console logger configuration
//!
//! Games ship it as a TOML file in their bundle, or build it in code:
//!
//! ```toml
//! level = "debug"
//! show_target = true
//! ```

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for [`ConsoleLogger`](crate::ConsoleLogger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Most verbose level forwarded to the console (default: info)
    #[serde(default = "default_level")]
    pub level: LevelFilter,
    /// Prefix each line with the record's target module (default: false)
    #[serde(default)]
    pub show_target: bool,
}

fn default_level() -> LevelFilter {
    LevelFilter::Info
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
