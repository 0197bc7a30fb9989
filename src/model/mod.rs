//! Application model - the complete state of the canvas
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! The partition tree itself is an immutable value; the model owns the current
//! root and replaces it wholesale on every edit.

pub mod drag;
pub mod generators;
pub mod layout;
pub mod partition;

use std::rc::Rc;

pub use drag::{snap, DragSession, DragSettings};
pub use generators::{
    ColorSource, IdGenerator, Palette, RandomHue, RandomIds, SeededIds, SequentialIds,
};
pub use layout::{compute_layout, DividerBar, Layout, PaneRect, Rect};
pub use partition::{Leaf, Node, NodeId, Split, SplitDirection};

use crate::config::{MetricsConfig, PartitionConfig};

/// The buttons drawn on panes and dividers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneControl {
    SplitVertical,
    SplitHorizontal,
    Remove,
}

/// What the pointer is currently over, for hover highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Control { node: NodeId, control: PaneControl },
    Divider(NodeId),
}

/// Metrics in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    pub scale_factor: f64,
    pub padding: f32,
    pub divider_width: f32,
    pub divider_hover_width: f32,
    pub button_size: f32,
    pub button_gap: f32,
    pub button_inset: f32,
}

impl ScaledMetrics {
    pub fn new(config: &MetricsConfig, scale_factor: f64) -> Self {
        let s = scale_factor as f32;
        Self {
            scale_factor,
            padding: (config.padding * s).round(),
            divider_width: (config.divider_width * s).round(),
            divider_hover_width: (config.divider_hover_width * s).round(),
            button_size: (config.button_size * s).round(),
            button_gap: (config.button_gap * s).round(),
            button_inset: (config.button_inset * s).round(),
        }
    }
}

impl Default for ScaledMetrics {
    fn default() -> Self {
        Self::new(&MetricsConfig::default(), 1.0)
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Current partition tree
    pub tree: Rc<Node>,
    /// Active divider drag, if any
    pub drag: Option<DragSession>,
    /// Control or divider under the pointer
    pub hover: Option<Hover>,
    pub config: PartitionConfig,
    pub metrics: ScaledMetrics,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    ids: Box<dyn IdGenerator>,
    colors: Box<dyn ColorSource>,
}

impl AppModel {
    /// Create a model holding a single pane
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: PartitionConfig,
        mut ids: Box<dyn IdGenerator>,
        mut colors: Box<dyn ColorSource>,
    ) -> Self {
        let root = Node::leaf(ids.next_id(), colors.next_color());
        Self::with_tree(window_width, window_height, config, root, ids, colors)
    }

    /// Create a model around an existing tree
    pub fn with_tree(
        window_width: u32,
        window_height: u32,
        config: PartitionConfig,
        tree: Rc<Node>,
        ids: Box<dyn IdGenerator>,
        colors: Box<dyn ColorSource>,
    ) -> Self {
        let metrics = ScaledMetrics::new(&config.metrics, 1.0);
        Self {
            tree,
            drag: None,
            hover: None,
            config,
            metrics,
            window_size: (window_width, window_height),
            ids,
            colors,
        }
    }

    /// Install `next` as the current tree.
    ///
    /// Returns false when `next` is the current tree. A drag session or hover
    /// pointing at a node that no longer exists is released.
    pub fn set_tree(&mut self, next: Rc<Node>) -> bool {
        if Rc::ptr_eq(&self.tree, &next) {
            return false;
        }
        self.tree = next;

        let stale_drag = self
            .drag
            .as_ref()
            .map(|session| session.split_id)
            .filter(|split_id| !self.tree.contains(*split_id));
        if let Some(split_id) = stale_drag {
            tracing::debug!(split = %split_id, "drag target removed, ending drag");
            self.drag = None;
        }
        if let Some(hover) = self.hover {
            if !self.tree.contains(hover.node()) {
                self.hover = None;
            }
        }
        true
    }

    /// Split leaf `id` using the model's id and color generators
    pub fn split_node(&mut self, id: NodeId, direction: SplitDirection) -> bool {
        let next = partition::split(
            &self.tree,
            id,
            direction,
            self.ids.as_mut(),
            self.colors.as_mut(),
        );
        self.set_tree(next)
    }

    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let next = partition::remove(&self.tree, id);
        self.set_tree(next)
    }

    /// Set a split's ratio as given; interactive callers clamp first
    pub fn resize_split(&mut self, id: NodeId, ratio: f32) -> bool {
        let next = partition::resize(&self.tree, id, ratio);
        self.set_tree(next)
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.metrics = ScaledMetrics::new(&self.config.metrics, scale_factor);
    }

    /// Area available to the tree: the window minus padding
    pub fn canvas_rect(&self) -> Rect {
        let (width, height) = self.window_size;
        Rect::new(0.0, 0.0, width as f32, height as f32).inset(self.metrics.padding)
    }

    /// Lay the current tree out on the canvas
    pub fn layout(&self) -> Layout {
        compute_layout(&self.tree, self.canvas_rect(), self.metrics.divider_width)
    }
}

impl Hover {
    /// The node this hover refers to
    pub fn node(&self) -> NodeId {
        match *self {
            Hover::Control { node, .. } => node,
            Hover::Divider(split_id) => split_id,
        }
    }
}
