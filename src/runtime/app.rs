use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
#[cfg(debug_assertions)]
use winit::keyboard::{Key, NamedKey};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use sidepanel::commands::Cmd;
use sidepanel::config::AppConfig;
use sidepanel::messages::{Msg, PointerMsg, ViewportMsg};
use sidepanel::model::AppModel;
use sidepanel::update::update;

use crate::view::hit_test::{hit_test, Point};
use crate::view::Renderer;

use super::input::key_to_msg;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    /// Last pointer position in logical pixels
    pointer_position: Option<(f64, f64)>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            model: AppModel::new(config),
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            pointer_position: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.model.config.window;
        let window_attributes = Window::default_attributes()
            .with_title("Side Panel")
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        // Sync the model with what the platform actually gave us
        let scale_factor = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(scale_factor);
        update(&mut self.model, Msg::Viewport(ViewportMsg::ScaleFactorChanged(scale_factor)));
        update(
            &mut self.model,
            Msg::Viewport(ViewportMsg::Resized {
                width: logical.width,
                height: logical.height,
            }),
        );

        tracing::info!(
            width = logical.width,
            height = logical.height,
            scale_factor,
            "Window created"
        );

        window.request_redraw();
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn scale_factor(&self) -> f64 {
        self.model.viewport.scale_factor
    }

    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else { return };
        let target = hit_test(&self.model, Point::new(x, y));
        window.set_cursor(target.cursor_icon());
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(self.scale_factor());
                update(
                    &mut self.model,
                    Msg::Viewport(ViewportMsg::Resized {
                        width: logical.width,
                        height: logical.height,
                    }),
                )
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::Viewport(ViewportMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }

                #[cfg(debug_assertions)]
                if event.logical_key == Key::Named(NamedKey::F7) {
                    let dump = crate::debug_dump::StateDump::from_model(&self.model);
                    match dump.save_to_file() {
                        Ok(path) => tracing::info!(path = %path.display(), "State dumped"),
                        Err(e) => tracing::error!("Failed to dump state: {}", e),
                    }
                    return None;
                }

                let msg = key_to_msg(&event.logical_key, self.modifiers.shift_key())?;
                update(&mut self.model, msg)
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor());
                self.pointer_position = Some((logical.x, logical.y));
                self.update_cursor_icon(logical.x, logical.y);
                update(
                    &mut self.model,
                    Msg::Pointer(PointerMsg::Moved {
                        x: logical.x,
                        y: logical.y,
                    }),
                )
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_position = None;
                update(&mut self.model, Msg::Pointer(PointerMsg::Left))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.pointer_position?;
                let msg = match state {
                    ElementState::Pressed => PointerMsg::Pressed { x, y },
                    ElementState::Released => PointerMsg::Released { x, y },
                };
                let cmd = update(&mut self.model, Msg::Pointer(msg));
                // Layout may have moved under a stationary pointer
                self.update_cursor_icon(x, y);
                cmd
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
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
        let should_redraw = match &self.window {
            Some(window) if window_id == window.id() && !should_exit => {
                self.handle_event(&event) == Some(Cmd::Redraw)
            }
            _ => false,
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
        // Nothing animates; sleep until the platform has an event
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
