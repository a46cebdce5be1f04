//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/sidepanel/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::disclosure::DisclosureOptions;

/// Initial window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Shape of the demo host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Whether the page markup includes its own toggle button
    #[serde(default = "default_provide_toggle")]
    pub provide_toggle: bool,

    /// Number of links in the panel
    #[serde(default = "default_nav_items")]
    pub nav_items: usize,

    /// Number of placeholder blocks in the content area
    #[serde(default = "default_content_blocks")]
    pub content_blocks: usize,
}

fn default_provide_toggle() -> bool {
    true
}

fn default_nav_items() -> usize {
    6
}

fn default_content_blocks() -> usize {
    4
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            provide_toggle: default_provide_toggle(),
            nav_items: default_nav_items(),
            content_blocks: default_content_blocks(),
        }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Built-in theme name ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub disclosure: DisclosureOptions,

    #[serde(default)]
    pub page: PageConfig,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            window: WindowConfig::default(),
            disclosure: DisclosureOptions::default(),
            page: PageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML, sanitizing the disclosure options
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.disclosure = config.disclosure.sanitized();
        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
