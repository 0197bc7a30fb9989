//! Partition tree - the pane hierarchy and its persistent update engine
//!
//! A partition is a full binary tree: every [`Node`] is either a colored
//! [`Leaf`] or a [`Split`] with exactly two children. Trees are never mutated
//! in place. Each edit returns a new root that shares every untouched subtree
//! with the old one by reference; only the path from the root down to the
//! edited node is reallocated.
//!
//! All edits are total: an unknown id, or an id naming the wrong kind of node,
//! returns the input root itself (`Rc::ptr_eq` holds), so callers can cheaply
//! detect "nothing happened".

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use uuid::Uuid;

use super::generators::{ColorSource, IdGenerator};
use crate::theme::Color;

/// Ratio given to a freshly created split
pub const DEFAULT_RATIO: f32 = 0.5;

// ============================================================================
// Identifiers
// ============================================================================

/// Globally unique identifier of a node (leaf or split)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Deterministic id, mostly useful for tests and seeded runs
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Axis along which a split divides its area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Children side by side, separated by a vertical divider
    Vertical,
    /// Children stacked, separated by a horizontal divider
    Horizontal,
}

/// A terminal pane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    pub id: NodeId,
    pub color: Color,
}

/// An internal node dividing its area between `a` and `b`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    pub id: NodeId,
    pub direction: SplitDirection,
    /// Fraction of the split's length given to `a`; `b` receives the rest
    pub ratio: f32,
    pub a: Rc<Node>,
    pub b: Rc<Node>,
}

impl Split {
    fn rebuild(&self, ratio: f32, a: Rc<Node>, b: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::Split(Split {
            id: self.id,
            direction: self.direction,
            ratio,
            a,
            b,
        }))
    }

    fn with_a(&self, a: Rc<Node>) -> Rc<Node> {
        self.rebuild(self.ratio, a, Rc::clone(&self.b))
    }

    fn with_b(&self, b: Rc<Node>) -> Rc<Node> {
        self.rebuild(self.ratio, Rc::clone(&self.a), b)
    }

    fn with_ratio(&self, ratio: f32) -> Rc<Node> {
        self.rebuild(ratio, Rc::clone(&self.a), Rc::clone(&self.b))
    }
}

/// Binary tree node
///
/// Serialized with a `type` tag (`"leaf"` / `"split"`) for state dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Leaf(Leaf),
    Split(Split),
}

impl Node {
    pub fn leaf(id: NodeId, color: Color) -> Rc<Node> {
        Rc::new(Node::Leaf(Leaf { id, color }))
    }

    pub fn split(
        id: NodeId,
        direction: SplitDirection,
        ratio: f32,
        a: Rc<Node>,
        b: Rc<Node>,
    ) -> Rc<Node> {
        Rc::new(Node::Split(Split {
            id,
            direction,
            ratio,
            a,
            b,
        }))
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        match self {
            Node::Leaf(leaf) => leaf.id,
            Node::Split(split) => split.id,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split> {
        match self {
            Node::Leaf(_) => None,
            Node::Split(split) => Some(split),
        }
    }

    /// Depth-first search for the node with `id`
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Node::Leaf(_) => None,
            Node::Split(split) => split.a.find(id).or_else(|| split.b.find(id)),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// The split whose direct child is `id`, if any
    pub fn parent_of(&self, id: NodeId) -> Option<&Split> {
        let Node::Split(split) = self else {
            return None;
        };
        if split.a.id() == id || split.b.id() == id {
            return Some(split);
        }
        split.a.parent_of(id).or_else(|| split.b.parent_of(id))
    }

    pub fn count_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => split.a.count_leaves() + split.b.count_leaves(),
        }
    }

    pub fn count_splits(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(split) => 1 + split.a.count_splits() + split.b.count_splits(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => 1 + split.a.depth().max(split.b.depth()),
        }
    }

    /// Leaf ids in visual order (`a` before `b`)
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_leaf_ids(&mut ids);
        ids
    }

    fn collect_leaf_ids(&self, out: &mut Vec<NodeId>) {
        match self {
            Node::Leaf(leaf) => out.push(leaf.id),
            Node::Split(split) => {
                split.a.collect_leaf_ids(out);
                split.b.collect_leaf_ids(out);
            }
        }
    }

    /// Every node id, pre-order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_node_ids(&mut ids);
        ids
    }

    fn collect_node_ids(&self, out: &mut Vec<NodeId>) {
        out.push(self.id());
        if let Node::Split(split) = self {
            split.a.collect_node_ids(out);
            split.b.collect_node_ids(out);
        }
    }
}

// ============================================================================
// Persistent updates
// ============================================================================

/// Rebuild the path from `node` to the node with `id`, replacing that node
/// with whatever `f` returns.
///
/// `None` means nothing changed: either `id` is not in this subtree or `f`
/// declined to replace it.
fn rebuild_path<F>(node: &Rc<Node>, id: NodeId, f: &mut F) -> Option<Rc<Node>>
where
    F: FnMut(&Rc<Node>) -> Option<Rc<Node>>,
{
    if node.id() == id {
        return f(node);
    }
    match node.as_ref() {
        Node::Leaf(_) => None,
        Node::Split(split) => {
            if let Some(a) = rebuild_path(&split.a, id, f) {
                return Some(split.with_a(a));
            }
            rebuild_path(&split.b, id, f).map(|b| split.with_b(b))
        }
    }
}

/// Replace the node with `id` by `f(node)`, sharing everything off the path.
///
/// Returns `tree` itself when `id` is missing or `f` returns `None`.
pub fn update_node<F>(tree: &Rc<Node>, id: NodeId, mut f: F) -> Rc<Node>
where
    F: FnMut(&Rc<Node>) -> Option<Rc<Node>>,
{
    rebuild_path(tree, id, &mut f).unwrap_or_else(|| Rc::clone(tree))
}

/// Split the leaf `id` in two.
///
/// The leaf keeps its id and color and becomes side `a` of a new split
/// (fresh id, ratio 0.5); side `b` is a new leaf with a fresh id and color.
/// The split id is drawn before the new leaf's id. Generators are only
/// consulted when the target leaf exists.
pub fn split<I, C>(
    tree: &Rc<Node>,
    id: NodeId,
    direction: SplitDirection,
    ids: &mut I,
    colors: &mut C,
) -> Rc<Node>
where
    I: IdGenerator + ?Sized,
    C: ColorSource + ?Sized,
{
    update_node(tree, id, |node| match node.as_ref() {
        Node::Leaf(_) => {
            let split_id = ids.next_id();
            let new_leaf = Node::leaf(ids.next_id(), colors.next_color());
            Some(Node::split(
                split_id,
                direction,
                DEFAULT_RATIO,
                Rc::clone(node),
                new_leaf,
            ))
        }
        Node::Split(_) => None,
    })
}

/// Remove the node `id` and its whole subtree.
///
/// The parent split collapses into the surviving sibling. The root itself is
/// never removed.
pub fn remove(tree: &Rc<Node>, id: NodeId) -> Rc<Node> {
    if tree.id() == id {
        return Rc::clone(tree);
    }
    remove_below(tree, id).unwrap_or_else(|| Rc::clone(tree))
}

fn remove_below(node: &Rc<Node>, id: NodeId) -> Option<Rc<Node>> {
    let Node::Split(split) = node.as_ref() else {
        return None;
    };
    if split.a.id() == id {
        return Some(Rc::clone(&split.b));
    }
    if split.b.id() == id {
        return Some(Rc::clone(&split.a));
    }
    if let Some(a) = remove_below(&split.a, id) {
        return Some(split.with_a(a));
    }
    remove_below(&split.b, id).map(|b| split.with_b(b))
}

/// Set the ratio of split `id`. Leaves have no ratio and are left alone.
///
/// The ratio is stored as given; interactive callers clamp it first.
pub fn resize(tree: &Rc<Node>, id: NodeId, ratio: f32) -> Rc<Node> {
    update_node(tree, id, |node| match node.as_ref() {
        Node::Split(split) if split.ratio != ratio => Some(split.with_ratio(ratio)),
        Node::Split(_) | Node::Leaf(_) => None,
    })
}
