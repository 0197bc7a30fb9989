//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the application state to JSON for easier debugging.
//! Triggered by F7 in debug builds.

use serde::Serialize;
use std::rc::Rc;

use partition::model::{AppModel, Hover, Node, Rect};

#[derive(Serialize)]
pub struct StateDump {
    pub timestamp: String,
    pub window_size: (u32, u32),
    pub scale_factor: f64,
    pub canvas: RectDump,
    pub leaf_count: usize,
    pub split_count: usize,
    pub depth: usize,
    pub drag: Option<DragDump>,
    pub hover: Option<String>,
    pub panes: Vec<PaneDump>,
    pub tree: Rc<Node>,
}

#[derive(Serialize)]
pub struct RectDump {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize)]
pub struct DragDump {
    pub split_id: String,
    pub start_ratio: f32,
    pub container_size: f32,
}

#[derive(Serialize)]
pub struct PaneDump {
    pub id: String,
    pub color: String,
    pub rect: RectDump,
}

impl From<Rect> for RectDump {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let layout = model.layout();

        Self {
            timestamp: chrono_timestamp(),
            window_size: model.window_size,
            scale_factor: model.metrics.scale_factor,
            canvas: model.canvas_rect().into(),
            leaf_count: model.tree.count_leaves(),
            split_count: model.tree.count_splits(),
            depth: model.tree.depth(),
            drag: model.drag.as_ref().map(|session| DragDump {
                split_id: session.split_id.to_string(),
                start_ratio: session.start_ratio,
                container_size: session.container_size,
            }),
            hover: model.hover.map(hover_label),
            panes: layout
                .panes
                .iter()
                .map(|pane| PaneDump {
                    id: pane.id.to_string(),
                    color: pane.color.to_hex(),
                    rect: pane.rect.into(),
                })
                .collect(),
            tree: Rc::clone(&model.tree),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    pub fn save_to_file(&self) -> std::io::Result<String> {
        let filename = format!("dumps/{}-state-dump.json", self.timestamp);

        // Ensure the dumps directory exists
        if let Some(parent) = std::path::Path::new(&filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&filename, self.to_json())?;
        Ok(filename)
    }
}

fn hover_label(hover: Hover) -> String {
    match hover {
        Hover::Control { node, control } => format!("{:?} on {}", control, node),
        Hover::Divider(split_id) => format!("divider of {}", split_id),
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

/// Civil date from days since 1970-01-01
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
