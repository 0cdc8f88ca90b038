use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Resolved configuration for one filtering run, after CLI flags and the
/// optional settings file have been merged.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the filtered files are written into
    pub dest_dir: PathBuf,
    /// Prefix prepended to each filtered file name
    pub prefix: String,
    /// When false, existing destination content is preserved ahead of new items
    pub overwrite: bool,
    /// Print full statistics (min/max/mean) instead of counts only
    pub full_stats: bool,
    /// Input files in processing order
    pub inputs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dest_dir: PathBuf::from("."),
            prefix: String::new(),
            overwrite: true,
            full_stats: false,
            inputs: Vec::new(),
        }
    }
}

impl Config {
    /// Full path of one category's destination file, e.g. `out/pre_floats.txt`.
    pub fn destination_path(&self, name: &str) -> PathBuf {
        self.dest_dir.join(format!("{}{}", self.prefix, name))
    }
}

/// Settings that may be supplied through a TOML file instead of flags.
/// Flags passed on the command line take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub append: Option<bool>,
    pub full: Option<bool>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
