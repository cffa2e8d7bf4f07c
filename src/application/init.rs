//! Initialize configuration use case

use crate::error::Result;
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default gymlog.toml into `dir`, creating the directory if needed.
pub fn init(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(CONFIG_FILE);
    Config::default().save_to_file(&path)?;

    Ok(path)
}
