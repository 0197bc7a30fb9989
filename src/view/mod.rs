//! View module - rendering the partition canvas
//!
//! Contains the Renderer struct, which paints the model into a softbuffer
//! surface. Drawing order: background, panes, dividers, leaf controls, split
//! remove buttons, so buttons always sit on top of the bars they belong to.

pub mod button;
pub mod frame;
pub mod geometry;

pub use frame::Frame;
pub use hit_test::{hit_test, resize_cursor, HitTarget, Point};

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use partition::model::{AppModel, Hover, Layout, PaneControl};

use button::{render_button, ButtonState};
use geometry::{leaf_controls, split_remove_button, widen_bar};

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we maintain our own buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        // Explicitly resize the surface to match window dimensions
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let back_buffer = vec![0u32; (width as usize) * (height as usize)];

        Ok(Self {
            surface,
            back_buffer,
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        // Minimized windows have nothing to draw into
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            let new_size = (width as usize) * (height as usize);
            self.back_buffer.resize(new_size, 0);
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let layout = model.layout();
        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            frame.clear(model.config.theme.background.to_argb_u32());
            Self::render_panes(&mut frame, &layout);
            Self::render_dividers(&mut frame, &layout, model);
            Self::render_controls(&mut frame, &layout, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }

    fn render_panes(frame: &mut Frame, layout: &Layout) {
        for pane in &layout.panes {
            frame.fill_rect(pane.rect, pane.color.to_argb_u32());
        }
    }

    /// Hovered or dragged dividers are drawn wider and in the hover color
    fn render_dividers(frame: &mut Frame, layout: &Layout, model: &AppModel) {
        let theme = &model.config.theme;
        let dragged = model.drag.as_ref().map(|session| session.split_id);

        for bar in &layout.dividers {
            let active = dragged == Some(bar.split_id)
                || model.hover == Some(Hover::Divider(bar.split_id));
            if active {
                let rect = widen_bar(bar, model.metrics.divider_hover_width);
                frame.fill_rect_blended(rect, theme.divider_hover.to_argb_u32());
            } else {
                frame.fill_rect_blended(bar.rect, theme.divider.to_argb_u32());
            }
        }
    }

    fn render_controls(frame: &mut Frame, layout: &Layout, model: &AppModel) {
        let theme = &model.config.theme;
        let metrics = &model.metrics;
        let state_for = |node, control: PaneControl| {
            if model.hover == Some(Hover::Control { node, control }) {
                ButtonState::Hovered
            } else {
                ButtonState::Normal
            }
        };

        for pane in &layout.panes {
            let Some(controls) = leaf_controls(pane.rect, metrics) else {
                continue;
            };
            for (control, rect) in controls {
                render_button(frame, theme, rect, control, state_for(pane.id, control));
            }
        }

        for bar in &layout.dividers {
            if let Some(rect) = split_remove_button(bar, metrics) {
                let state = state_for(bar.split_id, PaneControl::Remove);
                render_button(frame, theme, rect, PaneControl::Remove, state);
            }
        }
    }
}
