use std::rc::Rc;

use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
#[cfg(debug_assertions)]
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window};

use partition::cli::StartupConfig;
use partition::commands::Cmd;
use partition::messages::{AppMsg, DragMsg, Msg};
use partition::model::AppModel;
use partition::update::update;

use crate::view::{hit_test, resize_cursor, Point, Renderer};

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Initial window size in logical pixels
    initial_size: (u32, u32),
    mouse_position: Option<(f64, f64)>,
    cursor_icon: CursorIcon,
}

impl App {
    pub fn new(startup_config: StartupConfig) -> Self {
        let ids = startup_config.id_generator();
        let colors = startup_config.color_source();
        let (width, height) = startup_config.window_size;

        let model = AppModel::new(width, height, startup_config.config, ids, colors);
        tracing::info!(root = %model.tree.id(), "created canvas");

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            initial_size: (width, height),
            mouse_position: None,
            cursor_icon: CursorIcon::Default,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = self.initial_size;
        let window_attributes = Window::default_attributes()
            .with_title("Partition")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        update(
            &mut self.model,
            Msg::App(AppMsg::ScaleFactorChanged(window.scale_factor())),
        );
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(size.width, size.height)),
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn set_cursor_icon(&mut self, icon: CursorIcon) {
        if self.cursor_icon == icon {
            return;
        }
        self.cursor_icon = icon;
        if let Some(window) = &self.window {
            window.set_cursor(icon);
        }
    }

    /// Re-run hit-testing at the last pointer position.
    ///
    /// Updates hover highlighting and the cursor icon. While a divider is being
    /// dragged the resize cursor stays regardless of what is underneath.
    fn refresh_hover(&mut self) -> Option<Cmd> {
        if let Some(session) = &self.model.drag {
            let icon = resize_cursor(session.direction);
            self.set_cursor_icon(icon);
            return None;
        }

        let target = self.mouse_position.and_then(|(x, y)| {
            let layout = self.model.layout();
            hit_test(&layout, &self.model.metrics, Point::new(x, y))
        });

        let icon = target.map_or(CursorIcon::Default, |t| t.cursor_icon());
        self.set_cursor_icon(icon);

        let hover = target.and_then(|t| t.hover());
        update(&mut self.model, Msg::App(AppMsg::SetHover(hover)))
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::Focused(false) => {
                let cmd = update(&mut self.model, Msg::App(AppMsg::FocusLost));
                self.set_cursor_icon(CursorIcon::Default);
                cmd
            }
            #[cfg(debug_assertions)]
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::F7) =>
            {
                update(&mut self.model, Msg::App(AppMsg::DumpState))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));

                if self.model.drag.is_some() {
                    return update(
                        &mut self.model,
                        Msg::Drag(DragMsg::Move {
                            x: position.x,
                            y: position.y,
                        }),
                    );
                }
                self.refresh_hover()
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                if self.model.drag.is_some() {
                    // Keep dragging; winit keeps reporting motion while the button is held
                    return None;
                }
                self.refresh_hover()
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                let pt = Point::new(x, y);
                let layout = self.model.layout();
                let msg = hit_test(&layout, &self.model.metrics, pt)?.press_msg(pt)?;

                let result = update(&mut self.model, msg);
                // The tree may have changed under the pointer
                Cmd::merge(result, self.refresh_hover())
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let result = update(&mut self.model, Msg::Drag(DragMsg::End));
                Cmd::merge(result, self.refresh_hover())
            }
            _ => None,
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::DumpState => self.dump_state(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    #[cfg(debug_assertions)]
    fn dump_state(&self) {
        let dump = crate::debug_dump::StateDump::from_model(&self.model);
        match dump.save_to_file() {
            Ok(filename) => tracing::info!("State dumped to: {}", filename),
            Err(e) => tracing::warn!("Failed to dump state: {}", e),
        }
    }

    #[cfg(not(debug_assertions))]
    fn dump_state(&self) {
        tracing::debug!("State dumps are only available in debug builds");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                if let Some(cmd) = self.handle_event(&event) {
                    let needs_redraw = cmd.needs_redraw();
                    self.process_cmd(cmd);
                    needs_redraw
                } else {
                    false
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Everything is event driven; nothing animates
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
