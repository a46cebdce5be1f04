//! Where sidepanel keeps its files
//!
//! Everything lives under one directory: `config.yaml`, `logs/`, and (debug
//! builds) `dumps/`.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "sidepanel";

/// `$XDG_CONFIG_HOME/sidepanel`, `~/.config/sidepanel`, or `%APPDATA%\sidepanel`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Create `name` under the config dir if needed and return it
fn ensure_subdir(name: &str) -> Result<PathBuf, String> {
    let dir = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join(name);
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure_subdir("logs")
}

pub fn ensure_dumps_dir() -> Result<PathBuf, String> {
    ensure_subdir("dumps")
}
