//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the application state to JSON for easier debugging.
//! Triggered by F7 in debug builds.

use std::path::PathBuf;

use serde::Serialize;

use sidepanel::config_paths;
use sidepanel::disclosure::DisclosureController;
use sidepanel::dom::{Element, ElementId, Rect};
use sidepanel::model::{AppModel, PanelMode};

#[derive(Serialize)]
pub struct StateDump {
    pub timestamp: String,
    pub viewport: ViewportDump,
    pub panel_mode: String,
    pub controllers: Vec<DisclosureController>,
    pub ui: UiStateDump,
    pub elements: Vec<ElementDump>,
}

#[derive(Serialize)]
pub struct ViewportDump {
    pub width: f64,
    pub height: f64,
    pub scale_factor: f64,
    pub narrow: bool,
}

#[derive(Serialize)]
pub struct UiStateDump {
    pub focus: Option<ElementId>,
    pub focus_visible: bool,
    pub hovered: Option<ElementId>,
    pub pressed: Option<ElementId>,
}

#[derive(Serialize)]
pub struct ElementDump {
    pub element: ElementId,
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub layout: Option<Rect>,
    pub children: Vec<ElementId>,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let doc = &model.document;

        Self {
            timestamp: chrono_timestamp(),
            viewport: ViewportDump {
                width: model.viewport.width,
                height: model.viewport.height,
                scale_factor: model.viewport.scale_factor,
                narrow: model.is_narrow(),
            },
            panel_mode: panel_mode_name(model.panel_mode).to_string(),
            controllers: model.controllers.clone(),
            ui: UiStateDump {
                focus: model.ui.focus,
                focus_visible: model.ui.focus_visible,
                hovered: model.ui.hovered,
                pressed: model.ui.pressed,
            },
            elements: doc
                .tree_order()
                .into_iter()
                .map(|el| element_dump(el, doc.element(el)))
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        let dir = config_paths::ensure_dumps_dir().map_err(std::io::Error::other)?;
        let path = dir.join(format!("{}-state-dump.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

fn element_dump(el: ElementId, element: &Element) -> ElementDump {
    ElementDump {
        element: el,
        tag: element.kind.tag_name(),
        id: element.id.clone(),
        classes: element.classes.iter().cloned().collect(),
        attributes: element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        layout: element.layout,
        children: element.children.clone(),
    }
}

fn panel_mode_name(mode: PanelMode) -> &'static str {
    match mode {
        PanelMode::Docked => "docked",
        PanelMode::Overlay => "overlay",
        PanelMode::Hidden => "hidden",
    }
}

fn chrono_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();

    let days_since_epoch = secs / 86400;
    let secs_today = secs % 86400;

    let hours = secs_today / 3600;
    let minutes = (secs_today % 3600) / 60;
    let seconds = secs_today % 60;

    let (year, month, day) = days_to_ymd(days_since_epoch as i64);

    format!(
        "{:04}-{:02}-{:02}-{:02}{:02}{:02}",
        year, month, day, hours, minutes, seconds
    )
}

/// Civil date from days since the Unix epoch
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = (days - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}
