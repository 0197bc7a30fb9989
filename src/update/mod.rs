//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drag;
pub mod layout;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::TreeSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use drag::update_drag;
pub use layout::update_layout;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the tree shape before and after and logs the difference.
/// Pointer motion is too frequent to log per message.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, DragMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Drag(DragMsg::Move { .. }) | Msg::App(AppMsg::SetHover(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = TreeSnapshot::from_tree(&model.tree);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = TreeSnapshot::from_tree(&model.tree);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "tree", %diff, "tree changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Layout::RemoveNode(NodeId(..))`
/// - `Drag::End`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
