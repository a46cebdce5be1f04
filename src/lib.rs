//! Side panel - responsive disclosure controller
//!
//! This crate provides a small host document, the disclosure controller that
//! shows and hides a side panel on it, and the Elm-style model/update layer
//! the demo window drives.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod disclosure;
pub mod dom;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use disclosure::{DisclosureController, DisclosureOptions, PanelState};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
