//! Layout message handlers (split, remove, resize)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle tree edits.
///
/// Returns `None` when the edit left the tree unchanged.
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    let changed = match msg {
        LayoutMsg::SplitPane { id, direction } => {
            let changed = model.split_node(id, direction);
            if changed {
                tracing::debug!(pane = %id, ?direction, "split pane");
            }
            changed
        }

        LayoutMsg::RemoveNode(id) => {
            if id == model.tree.id() {
                tracing::debug!(node = %id, "refusing to remove root");
                return None;
            }
            model.remove_node(id)
        }

        LayoutMsg::ResizeSplit { id, ratio } => {
            if !ratio.is_finite() {
                tracing::warn!(split = %id, ratio, "ignoring non-finite ratio");
                return None;
            }
            let ratio = model.config.drag.clamp(ratio);
            model.resize_split(id, ratio)
        }
    };

    changed.then_some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartitionConfig;
    use crate::model::{Node, NodeId, Palette, SequentialIds, SplitDirection};

    fn model() -> AppModel {
        AppModel::new(
            800,
            600,
            PartitionConfig::default(),
            Box::new(SequentialIds::new()),
            Box::new(Palette::default()),
        )
    }

    fn resize_msg(id: NodeId, ratio: f32) -> LayoutMsg {
        LayoutMsg::ResizeSplit { id, ratio }
    }

    #[test]
    fn test_split_pane_redraws() {
        let mut model = model();
        let root = model.tree.id();
        let cmd = update_layout(
            &mut model,
            LayoutMsg::SplitPane {
                id: root,
                direction: SplitDirection::Vertical,
            },
        );
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(model.tree.count_leaves(), 2);
    }

    #[test]
    fn test_remove_root_is_ignored() {
        let mut model = model();
        let root = model.tree.id();
        assert_eq!(update_layout(&mut model, LayoutMsg::RemoveNode(root)), None);
        assert!(model.tree.is_leaf());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut model = model();
        let before = model.tree.clone();
        let cmd = update_layout(&mut model, LayoutMsg::RemoveNode(NodeId::from_u128(999)));
        assert_eq!(cmd, None);
        assert!(std::rc::Rc::ptr_eq(&before, &model.tree));
    }

    #[test]
    fn test_resize_is_clamped() {
        let mut model = model();
        let root = model.tree.id();
        update_layout(
            &mut model,
            LayoutMsg::SplitPane {
                id: root,
                direction: SplitDirection::Horizontal,
            },
        );
        let split_id = model.tree.id();

        update_layout(&mut model, resize_msg(split_id, 0.01));
        assert_eq!(model.tree.as_split().unwrap().ratio, 0.1);

        update_layout(&mut model, resize_msg(split_id, 2.0));
        assert_eq!(model.tree.as_split().unwrap().ratio, 0.9);

        let cmd = update_layout(&mut model, resize_msg(split_id, f32::NAN));
        assert_eq!(cmd, None);
        assert_eq!(model.tree.as_split().unwrap().ratio, 0.9);
    }

    #[test]
    fn test_resize_on_leaf_is_noop() {
        let mut model = model();
        let root = model.tree.id();
        let cmd = update_layout(&mut model, resize_msg(root, 0.3));
        assert_eq!(cmd, None);
        assert!(matches!(*model.tree, Node::Leaf(_)));
    }
}
