//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use partition::config::PartitionConfig;
use partition::model::{AppModel, Node, NodeId, Palette, SequentialIds, SplitDirection};
use partition::theme::Color;

pub fn id(n: u128) -> NodeId {
    NodeId::from_u128(n)
}

pub fn leaf(n: u128) -> Rc<Node> {
    Node::leaf(id(n), Color::rgb(n as u8, 0, 0))
}

pub fn vsplit(n: u128, ratio: f32, a: Rc<Node>, b: Rc<Node>) -> Rc<Node> {
    Node::split(id(n), SplitDirection::Vertical, ratio, a, b)
}

pub fn hsplit(n: u128, ratio: f32, a: Rc<Node>, b: Rc<Node>) -> Rc<Node> {
    Node::split(id(n), SplitDirection::Horizontal, ratio, a, b)
}

/// Generators that count ids from 100, so they never collide with the
/// small hand-picked ids used in fixtures
pub fn generators() -> (SequentialIds, Palette) {
    (SequentialIds::starting_at(100), Palette::default())
}

/// A model with a single pane on an 832x632 window (800x600 canvas at 16,16)
pub fn test_model() -> AppModel {
    AppModel::new(
        832,
        632,
        PartitionConfig::default(),
        Box::new(SequentialIds::new()),
        Box::new(Palette::default()),
    )
}

/// A model around a prepared tree, same window as [`test_model`]
pub fn model_with_tree(tree: Rc<Node>) -> AppModel {
    let (ids, colors) = generators();
    AppModel::with_tree(
        832,
        632,
        PartitionConfig::default(),
        tree,
        Box::new(ids),
        Box::new(colors),
    )
}

pub fn ratio_of(tree: &Node, split_id: NodeId) -> Option<f32> {
    tree.find(split_id)
        .and_then(|node| node.as_split())
        .map(|split| split.ratio)
}
