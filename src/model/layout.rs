//! Canvas layout - pixel rectangles for panes and dividers
//!
//! The tree only stores ratios; this module maps it onto a concrete canvas
//! rectangle. Side `a` of a split takes `ratio` of the split's length and side
//! `b` the remainder. The divider bar is centered on the boundary and overlays
//! both sides.

use super::partition::{Node, NodeId, SplitDirection};
use crate::theme::Color;

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink by `amount` on every side, never below zero size
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Cut along `direction` at `ratio`, returning the `a` and `b` parts
    pub fn split_at(&self, direction: SplitDirection, ratio: f32) -> (Rect, Rect) {
        match direction {
            SplitDirection::Vertical => {
                let a_width = self.width * ratio;
                (
                    Rect::new(self.x, self.y, a_width, self.height),
                    Rect::new(self.x + a_width, self.y, self.width - a_width, self.height),
                )
            }
            SplitDirection::Horizontal => {
                let a_height = self.height * ratio;
                (
                    Rect::new(self.x, self.y, self.width, a_height),
                    Rect::new(
                        self.x,
                        self.y + a_height,
                        self.width,
                        self.height - a_height,
                    ),
                )
            }
        }
    }
}

/// A leaf placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRect {
    pub id: NodeId,
    pub color: Color,
    pub rect: Rect,
}

/// The draggable bar between the two sides of a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBar {
    pub split_id: NodeId,
    pub direction: SplitDirection,
    /// Visual bar, centered on the boundary
    pub rect: Rect,
    /// Area of the whole split; drag deltas are relative to its length
    pub container: Rect,
    /// Nesting depth, 0 for the root split
    pub depth: usize,
}

impl DividerBar {
    /// Whether the split owning this bar may be removed (every split but the root)
    #[inline]
    pub fn is_removable(&self) -> bool {
        self.depth > 0
    }
}

/// Positions of every pane and divider for one tree on one canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Leaves in visual order
    pub panes: Vec<PaneRect>,
    /// Dividers in pre-order, so nested dividers come after their ancestors
    pub dividers: Vec<DividerBar>,
}

impl Layout {
    pub fn divider(&self, split_id: NodeId) -> Option<&DividerBar> {
        self.dividers.iter().find(|bar| bar.split_id == split_id)
    }

    pub fn pane_at_point(&self, x: f32, y: f32) -> Option<&PaneRect> {
        self.panes.iter().find(|pane| pane.rect.contains(x, y))
    }
}

/// Lay `root` out inside `available`
pub fn compute_layout(root: &Node, available: Rect, divider_width: f32) -> Layout {
    let mut layout = Layout::default();
    layout_node(root, available, divider_width, 0, &mut layout);
    layout
}

fn layout_node(node: &Node, rect: Rect, divider_width: f32, depth: usize, out: &mut Layout) {
    match node {
        Node::Leaf(leaf) => out.panes.push(PaneRect {
            id: leaf.id,
            color: leaf.color,
            rect,
        }),
        Node::Split(split) => {
            let (a_rect, b_rect) = rect.split_at(split.direction, split.ratio);
            let bar = match split.direction {
                SplitDirection::Vertical => Rect::new(
                    b_rect.x - divider_width / 2.0,
                    rect.y,
                    divider_width,
                    rect.height,
                ),
                SplitDirection::Horizontal => Rect::new(
                    rect.x,
                    b_rect.y - divider_width / 2.0,
                    rect.width,
                    divider_width,
                ),
            };
            out.dividers.push(DividerBar {
                split_id: split.id,
                direction: split.direction,
                rect: bar,
                container: rect,
                depth,
            });
            layout_node(&split.a, a_rect, divider_width, depth + 1, out);
            layout_node(&split.b, b_rect, divider_width, depth + 1, out);
        }
    }
}
