//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Hover, NodeId, SplitDirection};

/// Tree edits requested by the user
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Split a leaf; the leaf keeps its id as side `a`
    SplitPane {
        id: NodeId,
        direction: SplitDirection,
    },

    /// Remove a leaf or a whole split subtree.
    /// Targeting the root does nothing.
    RemoveNode(NodeId),

    /// Set a split's ratio (clamped to the configured bounds)
    ResizeSplit { id: NodeId, ratio: f32 },
}

/// Divider drag gesture
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// Pointer pressed on the divider of `split_id`
    Begin { split_id: NodeId, x: f64, y: f64 },
    /// Pointer moved while a drag is active
    Move { x: f64, y: f64 },
    /// Pointer released
    End,
}

/// Application-level messages (window events)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
    /// Pointer moved over a different control or divider
    SetHover(Option<Hover>),
    /// Window lost focus; any gesture in progress is abandoned
    FocusLost,
    /// Write the current tree to a JSON file (debug builds)
    DumpState,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Drag(DragMsg),
    App(AppMsg),
}
