//! Geometry helpers shared by rendering and hit-testing
//!
//! The renderer and the pointer handling must agree on where every button and
//! divider sits, so both go through these functions.

use partition::model::{DividerBar, PaneControl, Rect, ScaledMetrics, SplitDirection};

/// Leaf controls from left to right
pub const LEAF_CONTROLS: [PaneControl; 3] = [
    PaneControl::SplitVertical,
    PaneControl::SplitHorizontal,
    PaneControl::Remove,
];

/// Button rects for a pane's controls, right-aligned at its top-right corner.
///
/// In a pane too small for the configured row, the buttons, gaps and inset
/// shrink together so all three stay inside the pane. Returns `None` only
/// when that would leave buttons under one pixel.
pub fn leaf_controls(pane: Rect, metrics: &ScaledMetrics) -> Option<[(PaneControl, Rect); 3]> {
    let row_width = 3.0 * metrics.button_size + 2.0 * metrics.button_gap;
    let needed_width = row_width + 2.0 * metrics.button_inset;
    let needed_height = metrics.button_size + 2.0 * metrics.button_inset;
    if metrics.button_size <= 0.0 {
        return None;
    }

    let scale = (pane.width / needed_width)
        .min(pane.height / needed_height)
        .min(1.0);
    let size = metrics.button_size * scale;
    if size < 1.0 {
        return None;
    }
    let gap = metrics.button_gap * scale;
    let inset = metrics.button_inset * scale;

    let left = pane.right() - inset - row_width * scale;
    let top = pane.y + inset;
    let mut x = left;
    Some(LEAF_CONTROLS.map(|control| {
        let rect = Rect::new(x, top, size, size);
        x += size + gap;
        (control, rect)
    }))
}

/// Remove button of a split, centered on its divider.
///
/// The root split has none, and the button is hidden when the split is too
/// short along its divider to hold it.
pub fn split_remove_button(bar: &DividerBar, metrics: &ScaledMetrics) -> Option<Rect> {
    if !bar.is_removable() {
        return None;
    }
    let size = metrics.button_size;
    let along = match bar.direction {
        SplitDirection::Vertical => bar.container.height,
        SplitDirection::Horizontal => bar.container.width,
    };
    if size <= 0.0 || along < size + 2.0 * metrics.button_inset {
        return None;
    }

    let (cx, cy) = bar.rect.center();
    Some(Rect::new(cx - size / 2.0, cy - size / 2.0, size, size))
}

/// Divider bar widened to `width`, still centered on the split boundary
pub fn widen_bar(bar: &DividerBar, width: f32) -> Rect {
    let (cx, cy) = bar.rect.center();
    match bar.direction {
        SplitDirection::Vertical => Rect::new(cx - width / 2.0, bar.rect.y, width, bar.rect.height),
        SplitDirection::Horizontal => {
            Rect::new(bar.rect.x, cy - width / 2.0, bar.rect.width, width)
        }
    }
}

/// Area where a press grabs the divider
#[inline]
pub fn divider_hit_rect(bar: &DividerBar, metrics: &ScaledMetrics) -> Rect {
    widen_bar(bar, metrics.divider_hover_width.max(metrics.divider_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition::model::NodeId;

    fn bar(direction: SplitDirection, depth: usize) -> DividerBar {
        let container = Rect::new(0.0, 0.0, 400.0, 300.0);
        let rect = match direction {
            SplitDirection::Vertical => Rect::new(198.0, 0.0, 4.0, 300.0),
            SplitDirection::Horizontal => Rect::new(0.0, 148.0, 400.0, 4.0),
        };
        DividerBar {
            split_id: NodeId::from_u128(1),
            direction,
            rect,
            container,
            depth,
        }
    }

    #[test]
    fn test_leaf_controls_right_aligned() {
        let metrics = ScaledMetrics::default();
        let controls = leaf_controls(Rect::new(0.0, 0.0, 400.0, 300.0), &metrics).unwrap();

        // 20px buttons, 4px gap, 8px inset: row spans 324..392
        assert_eq!(controls[0].0, PaneControl::SplitVertical);
        assert_eq!(controls[0].1, Rect::new(324.0, 8.0, 20.0, 20.0));
        assert_eq!(controls[1].1, Rect::new(348.0, 8.0, 20.0, 20.0));
        assert_eq!(controls[2].0, PaneControl::Remove);
        assert_eq!(controls[2].1.right(), 392.0);
    }

    #[test]
    fn test_leaf_controls_full_size_when_they_fit() {
        let metrics = ScaledMetrics::default();
        // 68px row plus 8px inset on each side
        let controls = leaf_controls(Rect::new(0.0, 0.0, 84.0, 36.0), &metrics).unwrap();
        assert_eq!(controls[0].1, Rect::new(8.0, 8.0, 20.0, 20.0));
        assert_eq!(controls[2].1, Rect::new(56.0, 8.0, 20.0, 20.0));
    }

    #[test]
    fn test_leaf_controls_shrink_in_narrow_pane() {
        let metrics = ScaledMetrics::default();
        let pane = Rect::new(0.0, 0.0, 42.0, 300.0);
        let controls = leaf_controls(pane, &metrics).unwrap();

        // Half the width needed, so everything is scaled by 0.5
        assert_eq!(controls[0].1, Rect::new(4.0, 4.0, 10.0, 10.0));
        assert_eq!(controls[1].1, Rect::new(16.0, 4.0, 10.0, 10.0));
        assert_eq!(controls[2].1, Rect::new(28.0, 4.0, 10.0, 10.0));
        for (_, rect) in controls {
            assert!(rect.x >= pane.x && rect.right() <= pane.right());
        }
    }

    #[test]
    fn test_leaf_controls_shrink_in_short_pane() {
        let metrics = ScaledMetrics::default();
        let controls = leaf_controls(Rect::new(100.0, 50.0, 400.0, 18.0), &metrics).unwrap();
        assert_eq!(controls[2].1, Rect::new(486.0, 54.0, 10.0, 10.0));
    }

    #[test]
    fn test_leaf_controls_none_in_degenerate_pane() {
        let metrics = ScaledMetrics::default();
        assert!(leaf_controls(Rect::new(0.0, 0.0, 400.0, 1.0), &metrics).is_none());
        assert!(leaf_controls(Rect::new(0.0, 0.0, 0.0, 300.0), &metrics).is_none());
    }

    #[test]
    fn test_root_split_has_no_remove_button() {
        let metrics = ScaledMetrics::default();
        assert!(split_remove_button(&bar(SplitDirection::Vertical, 0), &metrics).is_none());

        let inner = bar(SplitDirection::Vertical, 1);
        let button = split_remove_button(&inner, &metrics).unwrap();
        assert_eq!(button, Rect::new(190.0, 140.0, 20.0, 20.0));
    }

    #[test]
    fn test_divider_hit_rect_is_wider() {
        let metrics = ScaledMetrics::default();
        let hit = divider_hit_rect(&bar(SplitDirection::Horizontal, 0), &metrics);
        assert_eq!(hit, Rect::new(0.0, 146.0, 400.0, 8.0));
    }
}
