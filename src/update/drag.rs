//! Divider drag handlers
//!
//! The session lives in `model.drag` between `Begin` and `End`. It is also
//! dropped when the window loses focus or its split leaves the tree, so a
//! missed pointer-up never leaves a divider attached to the pointer.

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{AppModel, DragSession};

/// Handle divider drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Begin { split_id, x, y } => {
            let Some(split) = model.tree.find(split_id).and_then(|node| node.as_split()) else {
                tracing::debug!(split = %split_id, "drag begin on unknown split");
                return None;
            };
            let layout = model.layout();
            let bar = layout.divider(split_id)?;

            if let Some(previous) = model.drag.take() {
                tracing::debug!(split = %previous.split_id, "replacing unfinished drag");
            }
            let session = DragSession::begin(split, bar.container, x, y);
            tracing::debug!(
                split = %split_id,
                start_ratio = session.start_ratio,
                container = session.container_size,
                "drag started"
            );
            model.drag = Some(session);
            Some(Cmd::Redraw)
        }

        DragMsg::Move { x, y } => {
            let session = model.drag.as_ref()?;
            let split_id = session.split_id;
            let ratio = session.ratio_at(x, y, &model.config.drag);
            model.resize_split(split_id, ratio).then_some(Cmd::Redraw)
        }

        DragMsg::End => {
            let session = model.drag.take()?;
            tracing::debug!(split = %session.split_id, "drag ended");
            Some(Cmd::Redraw)
        }
    }
}
