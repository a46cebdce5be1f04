//! Logging setup and panel state snapshots
//!
//! `RUST_LOG` filters the console (default `warn`). Useful targets:
//! - `panel=debug` - state diffs after each update (debug builds)
//! - `message=trace` - every dispatched message, pointer moves included
//! - `sidepanel::disclosure=debug` - controller bookkeeping
//!
//! The file log under `~/.config/sidepanel/logs/` always records debug level
//! and rotates daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::disclosure::PanelState;
use crate::model::AppModel;

/// Install the console and rolling file layers
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, "sidepanel.log"))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of every controller's panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub panels: Vec<(String, PanelState)>,
    pub focus: Option<usize>,
}

impl PanelSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            panels: model
                .controllers
                .iter()
                .map(|c| (c.options().panel_id.clone(), c.state()))
                .collect(),
            focus: model.ui.focus.map(|el| el.0),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.panels.len() != other.panels.len() {
            changes.push(format!(
                "controllers: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        }

        for ((id, before), (_, after)) in self.panels.iter().zip(&other.panels) {
            if before != after {
                changes.push(format!("{}: {} → {}", id, before, after));
            }
        }

        if self.focus != other.focus {
            changes.push(format!("focus: {:?} → {:?}", self.focus, other.focus));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
