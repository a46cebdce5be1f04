//! Command-line argument parsing
//!
//! Flags override values loaded from the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Responsive side panel demo
#[derive(Parser, Debug, Default)]
#[command(name = "sidepanel", version, about = "Responsive side panel demo")]
pub struct CliArgs {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Narrow-layout breakpoint in logical pixels
    #[arg(long, value_name = "PX")]
    pub breakpoint: Option<f64>,

    /// Id of the panel element
    #[arg(long, value_name = "ID")]
    pub panel_id: Option<String>,

    /// Id of the toggle element
    #[arg(long, value_name = "ID")]
    pub toggle_id: Option<String>,

    /// Leave the toggle out of the page markup (exercises the fallback toggle)
    #[arg(long)]
    pub omit_toggle: bool,

    /// Theme name (dark, light)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl CliArgs {
    /// Config file to read (and write with `--write-config`)
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(crate::config_paths::config_file)
    }

    /// Load the config file this invocation points at
    pub fn load_config(&self) -> AppConfig {
        match self.config_path() {
            Some(path) => AppConfig::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                AppConfig::default()
            }
        }
    }

    /// Apply CLI overrides on top of a loaded config
    pub fn into_config(self, base: AppConfig) -> Result<AppConfig, String> {
        let mut config = base;

        if let Some(width) = self.width {
            if width == 0 {
                return Err("--width must be greater than 0".to_string());
            }
            config.window.width = width;
        }
        if let Some(height) = self.height {
            if height == 0 {
                return Err("--height must be greater than 0".to_string());
            }
            config.window.height = height;
        }
        if let Some(breakpoint) = self.breakpoint {
            if !breakpoint.is_finite() || breakpoint <= 0.0 {
                return Err(format!("--breakpoint must be a positive number, got {}", breakpoint));
            }
            config.disclosure.breakpoint_px = breakpoint;
        }
        if let Some(panel_id) = self.panel_id {
            config.disclosure.panel_id = panel_id;
        }
        if let Some(toggle_id) = self.toggle_id {
            config.disclosure.toggle_id = toggle_id;
        }
        if self.omit_toggle {
            config.page.provide_toggle = false;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }

        config.disclosure = config.disclosure.sanitized();
        Ok(config)
    }
}
