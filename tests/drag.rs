//! Tests for divider dragging through the update loop

mod common;

use common::{hsplit, id, leaf, model_with_tree, ratio_of, test_model, vsplit};
use partition::commands::Cmd;
use partition::messages::{AppMsg, DragMsg, LayoutMsg, Msg};
use partition::model::drag::{snap, snap_to, DragSession, DragSettings};
use partition::model::{Rect, SplitDirection};
use partition::update::update;

fn begin(split: u128, x: f64, y: f64) -> Msg {
    Msg::Drag(DragMsg::Begin {
        split_id: id(split),
        x,
        y,
    })
}

fn move_to(x: f64, y: f64) -> Msg {
    Msg::Drag(DragMsg::Move { x, y })
}

// ============================================================================
// Snap
// ============================================================================

#[test]
fn test_snap_examples() {
    assert_eq!(snap(0.5), 0.5);
    assert_eq!(snap(0.51), 0.5);
    assert_eq!(snap(0.6), 0.6);
    assert_eq!(snap(0.26), 0.25);
    assert_eq!(snap(0.74), 0.75);
}

#[test]
fn test_snap_custom_points() {
    assert_eq!(snap_to(0.32, &[1.0 / 3.0, 2.0 / 3.0], 0.05), 1.0 / 3.0);
    assert_eq!(snap_to(0.5, &[1.0 / 3.0, 2.0 / 3.0], 0.05), 0.5);
    assert_eq!(snap_to(0.5, &[], 0.05), 0.5);
}

// ============================================================================
// Session math
// ============================================================================

#[test]
fn test_session_ratio_for_vertical_split() {
    let tree = vsplit(10, 0.5, leaf(1), leaf(2));
    let split = tree.as_split().unwrap();
    let session = DragSession::begin(split, Rect::new(0.0, 0.0, 1000.0, 500.0), 500.0, 250.0);
    let settings = DragSettings::default();

    assert_eq!(session.direction, SplitDirection::Vertical);
    assert_eq!(session.container_size, 1000.0);
    assert!((session.ratio_at(700.0, 0.0, &settings) - 0.7).abs() < 1e-6);
    assert_eq!(session.ratio_at(10_000.0, 0.0, &settings), 0.9);
    assert_eq!(session.ratio_at(-10_000.0, 0.0, &settings), 0.1);
}

#[test]
fn test_session_degenerate_container_keeps_start_ratio() {
    let tree = hsplit(10, 0.3, leaf(1), leaf(2));
    let split = tree.as_split().unwrap();
    let settings = DragSettings::default();

    let collapsed = DragSession::begin(split, Rect::new(0.0, 0.0, 100.0, 0.0), 0.0, 0.0);
    assert_eq!(collapsed.ratio_at(0.0, 50.0, &settings), 0.3);

    let mut weird = collapsed.clone();
    weird.container_size = f32::NAN;
    assert_eq!(weird.ratio_at(0.0, 50.0, &settings), 0.3);
}

// ============================================================================
// Through update()
// ============================================================================

#[test]
fn test_drag_gesture_resizes_split() {
    // 800x600 canvas at (16, 16); divider of S1 at x = 416
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), leaf(2)));

    let began = update(&mut model, begin(10, 416.0, 300.0));
    assert_eq!(began, Some(Cmd::Redraw));
    update(&mut model, move_to(456.0, 300.0));
    assert!((ratio_of(&model.tree, id(10)).unwrap() - 0.55).abs() < 1e-6);

    update(&mut model, move_to(336.0, 300.0));
    assert!((ratio_of(&model.tree, id(10)).unwrap() - 0.4).abs() < 1e-6);

    update(&mut model, Msg::Drag(DragMsg::End));
    assert!(model.drag.is_none());

    // Moves after the gesture ended change nothing
    let before = model.tree.clone();
    assert_eq!(update(&mut model, move_to(700.0, 300.0)), None);
    assert!(std::rc::Rc::ptr_eq(&before, &model.tree));
}

#[test]
fn test_nested_drag_uses_own_container() {
    // S2 lives in the right half: 400x600 at (416, 16), divider at y = 316
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), hsplit(11, 0.5, leaf(2), leaf(3))));

    update(&mut model, begin(11, 600.0, 316.0));
    update(&mut model, move_to(600.0, 436.0));

    // +120 of 600 = +0.2
    assert!((ratio_of(&model.tree, id(11)).unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(ratio_of(&model.tree, id(10)), Some(0.5));
}

#[test]
fn test_drag_snaps_near_quarter() {
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), leaf(2)));
    update(&mut model, begin(10, 416.0, 300.0));

    // 0.5 + 190/800 = 0.7375, within 0.02 of 0.75
    update(&mut model, move_to(606.0, 300.0));
    assert_eq!(ratio_of(&model.tree, id(10)), Some(0.75));
}

#[test]
fn test_focus_loss_releases_drag() {
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), leaf(2)));
    update(&mut model, begin(10, 416.0, 300.0));
    assert!(model.drag.is_some());

    update(&mut model, Msg::App(AppMsg::FocusLost));
    assert!(model.drag.is_none());

    update(&mut model, move_to(600.0, 300.0));
    assert_eq!(ratio_of(&model.tree, id(10)), Some(0.5));
}

#[test]
fn test_removing_dragged_split_releases_drag() {
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), hsplit(11, 0.5, leaf(2), leaf(3))));
    update(&mut model, begin(11, 600.0, 316.0));
    assert!(model.drag.is_some());

    update(&mut model, Msg::Layout(LayoutMsg::RemoveNode(id(11))));
    assert!(model.drag.is_none());
    assert_eq!(model.tree.id(), id(1));
}

#[test]
fn test_collapsing_parent_keeps_drag_on_surviving_split() {
    // Removing A promotes S2 to root; the drag on S2 stays valid
    let mut model = model_with_tree(vsplit(10, 0.5, leaf(1), hsplit(11, 0.5, leaf(2), leaf(3))));
    update(&mut model, begin(11, 600.0, 316.0));

    update(&mut model, Msg::Layout(LayoutMsg::RemoveNode(id(1))));
    assert_eq!(model.tree.id(), id(11));
    assert!(model.drag.is_some());
}

#[test]
fn test_begin_on_unknown_split_is_ignored() {
    let mut model = test_model();
    assert_eq!(update(&mut model, begin(999, 0.0, 0.0)), None);
    assert!(model.drag.is_none());
}
