//! Button rendering primitives
//!
//! Provides a simple, pure-function API for rendering the pane control
//! buttons. No widget tree or stored state: callers determine visual state
//! from the model and pass it to the render function.

use partition::model::{PaneControl, Rect};
use partition::theme::Theme;

use super::frame::Frame;

/// Visual state of a button, determined by the caller from the hover state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Default idle state
    #[default]
    Normal,
    /// Pointer is over the button
    Hovered,
}

/// Render a control button with its icon.
///
/// Icons are drawn from rectangles: a box split down the middle, a box split
/// across the middle, and a minus sign.
pub fn render_button(
    frame: &mut Frame,
    theme: &Theme,
    rect: Rect,
    control: PaneControl,
    state: ButtonState,
) {
    let bg = match state {
        ButtonState::Normal => theme.button_background,
        ButtonState::Hovered => theme.button_hover,
    };
    frame.fill_rect_blended(rect, bg.to_argb_u32());

    let fg = theme.button_foreground.to_argb_u32();
    let stroke = (rect.width / 10.0).round().max(1.0);
    let icon = rect.inset((rect.width * 0.25).round());
    let (cx, cy) = icon.center();

    match control {
        PaneControl::SplitVertical => {
            frame.stroke_rect(icon, stroke, fg);
            frame.fill_rect(
                Rect::new((cx - stroke / 2.0).round(), icon.y, stroke, icon.height),
                fg,
            );
        }
        PaneControl::SplitHorizontal => {
            frame.stroke_rect(icon, stroke, fg);
            frame.fill_rect(
                Rect::new(icon.x, (cy - stroke / 2.0).round(), icon.width, stroke),
                fg,
            );
        }
        PaneControl::Remove => {
            frame.fill_rect(
                Rect::new(icon.x, (cy - stroke / 2.0).round(), icon.width, stroke),
                fg,
            );
        }
    }
}
