//! Shared helpers for benchmarks

use std::rc::Rc;

use partition::model::partition::split;
use partition::model::{Node, NodeId, Palette, SequentialIds, SplitDirection};
use partition::theme::Color;

/// A balanced tree with `2^depth` leaves, alternating split directions
#[allow(dead_code)]
pub fn balanced_tree(depth: usize) -> Rc<Node> {
    let mut ids = SequentialIds::new();
    let mut colors = Palette::default();
    let mut tree = Node::leaf(NodeId::from_u128(0), Color::rgb(0, 0, 0));

    for level in 0..depth {
        let direction = if level % 2 == 0 {
            SplitDirection::Vertical
        } else {
            SplitDirection::Horizontal
        };
        for leaf in tree.leaf_ids() {
            tree = split(&tree, leaf, direction, &mut ids, &mut colors);
        }
    }
    tree
}

/// A degenerate tree where every split nests in side `b`, `len` splits deep
#[allow(dead_code)]
pub fn chain_tree(len: usize) -> Rc<Node> {
    let mut ids = SequentialIds::new();
    let mut colors = Palette::default();
    let mut tree = Node::leaf(NodeId::from_u128(0), Color::rgb(0, 0, 0));

    for _ in 0..len {
        let Some(&last) = tree.leaf_ids().last() else {
            break;
        };
        tree = split(&tree, last, SplitDirection::Vertical, &mut ids, &mut colors);
    }
    tree
}

/// The last leaf in visual order: the deepest one in a chain tree
#[allow(dead_code)]
pub fn last_leaf(tree: &Node) -> NodeId {
    *tree.leaf_ids().last().unwrap()
}
