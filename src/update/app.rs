//! App message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            if model.window_size == (width, height) {
                return None;
            }
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            tracing::info!("Scale factor changed to {}", scale_factor);
            model.set_scale_factor(scale_factor);
            Some(Cmd::Redraw)
        }

        AppMsg::SetHover(hover) => {
            if model.hover == hover {
                return None;
            }
            model.hover = hover;
            Some(Cmd::Redraw)
        }

        AppMsg::FocusLost => {
            let had_drag = model.drag.take().is_some();
            let had_hover = model.hover.take().is_some();
            if had_drag {
                tracing::debug!("focus lost during drag, releasing divider");
            }
            (had_drag || had_hover).then_some(Cmd::Redraw)
        }

        AppMsg::DumpState => Some(Cmd::DumpState),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartitionConfig;
    use crate::model::{
        DragSession, Hover, Palette, PaneControl, Rect, SequentialIds, SplitDirection,
    };

    fn model() -> AppModel {
        AppModel::new(
            800,
            600,
            PartitionConfig::default(),
            Box::new(SequentialIds::new()),
            Box::new(Palette::default()),
        )
    }

    #[test]
    fn test_resize_updates_canvas() {
        let mut model = model();
        assert_eq!(update_app(&mut model, AppMsg::Resize(800, 600)), None);
        assert_eq!(
            update_app(&mut model, AppMsg::Resize(1000, 500)),
            Some(Cmd::Redraw)
        );
        assert_eq!(model.canvas_rect(), Rect::new(16.0, 16.0, 968.0, 468.0));
    }

    #[test]
    fn test_scale_factor_scales_metrics() {
        let mut model = model();
        update_app(&mut model, AppMsg::ScaleFactorChanged(2.0));
        assert_eq!(model.metrics.padding, 32.0);
        assert_eq!(model.metrics.divider_width, 8.0);
    }

    #[test]
    fn test_hover_redraws_only_on_change() {
        let mut model = model();
        let hover = Some(Hover::Control {
            node: model.tree.id(),
            control: PaneControl::Remove,
        });
        assert_eq!(
            update_app(&mut model, AppMsg::SetHover(hover)),
            Some(Cmd::Redraw)
        );
        assert_eq!(update_app(&mut model, AppMsg::SetHover(hover)), None);
        assert_eq!(
            update_app(&mut model, AppMsg::SetHover(None)),
            Some(Cmd::Redraw)
        );
    }

    #[test]
    fn test_focus_lost_releases_drag() {
        let mut model = model();
        let root = model.tree.id();
        model.split_node(root, SplitDirection::Vertical);
        let split = model.tree.as_split().unwrap().clone();
        model.drag = Some(DragSession::begin(&split, model.canvas_rect(), 400.0, 300.0));

        assert_eq!(update_app(&mut model, AppMsg::FocusLost), Some(Cmd::Redraw));
        assert!(model.drag.is_none());
        assert_eq!(update_app(&mut model, AppMsg::FocusLost), None);
    }
}
