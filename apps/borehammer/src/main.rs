use anyhow::{Context, Result};
use borehammer_common::{ControlConfig, DemoConfig};
use borehammer_input::{Action, ActionState};
use borehammer_kernel::Player;
use borehammer_render::{RenderView, Viewport};
use borehammer_render_wgpu::{GpuContext, RenderError, WgpuRenderer};
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Longest frame delta fed to the simulation, in seconds.
const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Parser)]
#[command(name = "borehammer", version, about = "First-person ground-plane demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Fixed key bindings.
fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Action::MoveForward),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Action::MoveBackward),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Frame-loop state: everything that changes between frames except GPU objects.
struct AppState {
    player: Player,
    actions: ActionState,
    // Virtual absolute pointer built from relative device motion.
    pointer: (f64, f64),
    cursor_captured: bool,
    last_frame: Instant,
}

impl AppState {
    fn new(controls: &ControlConfig) -> Self {
        Self {
            player: Player::new(controls),
            actions: ActionState::new(),
            pointer: (0.0, 0.0),
            cursor_captured: false,
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        self.player.on_tick(dt, self.actions.movement());
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(action) = action_for_key(key) {
            self.actions.apply(action, pressed);
        }
    }

    fn handle_pointer_motion(&mut self, dx: f64, dy: f64) {
        if !self.cursor_captured {
            return;
        }
        self.pointer.0 += dx;
        self.pointer.1 += dy;
        self.player.on_pointer_move(self.pointer.0, self.pointer.1);
    }

    fn render_view(&self) -> RenderView {
        let camera = self.player.camera();
        RenderView {
            eye: self.player.eye(),
            front: camera.front(),
            up: camera.up(),
        }
    }
}

/// GPU objects. The renderer is declared first so it drops before the device.
struct Gpu {
    renderer: WgpuRenderer,
    context: GpuContext,
}

struct BoreHammerApp {
    config: DemoConfig,
    state: AppState,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    minimized: bool,
    fatal: Option<anyhow::Error>,
}

impl BoreHammerApp {
    fn new(config: DemoConfig) -> Self {
        let state = AppState::new(&config.controls);
        Self {
            config,
            state,
            window: None,
            gpu: None,
            minimized: false,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let context = GpuContext::new(window.clone(), viewport)
            .context("failed to initialize graphics context")?;
        let renderer = WgpuRenderer::new(
            context.device(),
            context.format(),
            context.viewport(),
            self.config.projection,
        )
        .context("failed to build render pipelines")?;

        self.window = Some(window);
        self.gpu = Some(Gpu { renderer, context });
        self.set_cursor_captured(true);
        self.state.last_frame = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if captured {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::Locked) {
                tracing::warn!("cursor lock unavailable ({e}), confining instead");
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
                    tracing::warn!("cursor confine unavailable: {e}");
                }
            }
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
        }
        window.set_cursor_visible(!captured);
        self.state.cursor_captured = captured;
        self.state.player.reset_pointer();
        tracing::debug!(captured, "cursor capture changed");
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let viewport = Viewport::new(size.width, size.height);
        self.minimized = viewport.is_empty();
        if self.minimized {
            return;
        }
        if let Some(gpu) = &mut self.gpu {
            gpu.context.resize(viewport);
            gpu.renderer
                .resize(gpu.context.device(), gpu.context.queue(), viewport);
            tracing::debug!(width = viewport.width, height = viewport.height, "resized");
        }
    }

    fn draw_frame(&self) -> Result<(), RenderError> {
        let Some(gpu) = &self.gpu else {
            return Ok(());
        };
        if self.minimized {
            return Ok(());
        }
        let Some(frame) = gpu.context.acquire()? else {
            return Ok(());
        };
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        gpu.renderer.render(
            gpu.context.device(),
            gpu.context.queue(),
            &target,
            &self.state.render_view(),
            gpu.context.viewport(),
        );
        frame.present();
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.state.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA);
        self.state.last_frame = now;
        self.state.update(dt);

        if let Err(e) = self.draw_frame() {
            self.fail(event_loop, e.into());
            return;
        }

        if self.state.actions.quit_requested() {
            tracing::info!("escape pressed, closing");
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for BoreHammerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.resize(new_size);
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    self.state.actions.release_all();
                }
                self.set_cursor_captured(focused);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.handle_pointer_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.gpu = None;
        self.window = None;
        tracing::info!("shut down");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("borehammer starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = BoreHammerApp::new(DemoConfig::default());
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borehammer_common::MovementInput;

    #[test]
    fn bindings() {
        assert_eq!(action_for_key(KeyCode::ArrowUp), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::ArrowDown), Some(Action::MoveBackward));
        assert_eq!(action_for_key(KeyCode::KeyS), Some(Action::MoveBackward));
        assert_eq!(action_for_key(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::KeyA), None);
    }

    #[test]
    fn held_key_drives_tick() {
        let mut state = AppState::new(&ControlConfig::default());
        state.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(
            state.actions.movement(),
            MovementInput {
                forward: true,
                backward: false
            }
        );
        let z = state.player.camera().position.z;
        state.update(0.5);
        assert!((state.player.camera().position.z - (z - 2.0)).abs() < 1e-5);

        state.handle_key(KeyCode::ArrowUp, false);
        state.update(0.016);
        assert_eq!(state.player.bob().amount(), 0.0);
    }

    #[test]
    fn pointer_ignored_until_captured() {
        let mut state = AppState::new(&ControlConfig::default());
        state.handle_pointer_motion(50.0, 0.0);
        state.handle_pointer_motion(50.0, 0.0);
        assert_eq!(state.player.camera().yaw(), -90.0);

        state.cursor_captured = true;
        state.handle_pointer_motion(10.0, 0.0);
        assert_eq!(state.player.camera().yaw(), -90.0);
        state.handle_pointer_motion(10.0, 0.0);
        assert!((state.player.camera().yaw() - -89.0).abs() < 1e-5);
    }

    #[test]
    fn render_view_uses_bobbed_eye() {
        let mut state = AppState::new(&ControlConfig::default());
        state.handle_key(KeyCode::KeyW, true);
        state.update(0.1);
        let view = state.render_view();
        assert_eq!(view.eye, state.player.eye());
        assert_ne!(view.eye, state.player.camera().position);
        assert_eq!(view.up, state.player.camera().up());
    }
}
