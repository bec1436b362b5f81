use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use glam::Vec2;

mod config;
mod error;
mod math;
mod renderer;
mod ui;

use config::ViewerConfig;
use error::SetupError;
use math::{ShapeParams, sample_surface};
use renderer::{GpuContext, Trackball, WireframeScene};
use ui::{HudActions, HudState, SurfaceInfo, apply_theme, draw_failure, draw_help_overlay, draw_hud};

struct App {
    config: ViewerConfig,

    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    scene: Option<WireframeScene>,
    failure: Option<String>,

    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_ctx: egui::Context,

    trackball: Trackball,
    hud: HudState,
    cursor: Option<Vec2>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let hud = HudState::new(config.strip_mode);

        Self {
            config,

            window: None,
            gpu: None,
            scene: None,
            failure: None,

            egui_state: None,
            egui_renderer: None,
            egui_ctx: egui::Context::default(),

            trackball: Trackball::default(),
            hud,
            cursor: None,
        }
    }

    fn init(&mut self, window: Arc<Window>) -> Result<(), SetupError> {
        let size = window.inner_size();
        self.trackball
            .set_viewport(size.width as f32, size.height as f32);

        let gpu = pollster::block_on(GpuContext::new(window.clone(), self.config.vsync))?;

        // the overlay comes up before the scene so a shader failure can still be shown
        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            self.egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(gpu.device.limits().max_texture_dimension_2d as usize),
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);
        apply_theme(&self.egui_ctx);

        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);
        let gpu = self.gpu.insert(gpu);

        let surface = &self.config.surface;
        let shape = ShapeParams::from_scale(surface.scale)?;
        let mesh = sample_surface(surface.u_segments, surface.v_segments, &shape);
        log::info!(
            "sampled {} x {} grid, {} points per family",
            mesh.u_segments,
            mesh.v_segments,
            mesh.points_per_family()
        );

        let mut scene = WireframeScene::new(gpu, self.config.view, self.config.strip_mode)?;
        scene.upload_mesh(gpu, &mesh);

        self.hud.surface = Some(SurfaceInfo::new(&mesh, shape));
        self.scene = Some(scene);
        Ok(())
    }

    fn fail(&mut self, err: SetupError) {
        log::error!("initialization failed: {}", err);

        let message = err.user_message();
        if let Some(title) = failure_title(self.config.title, &message, self.gpu.is_some()) {
            log::error!("{}", message);
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
        }

        self.failure = Some(message);
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) else {
            return;
        };

        let raw_input = egui_state.take_egui_input(window);
        let dragging = self.trackball.is_dragging();
        let mut hud_actions = HudActions::default();

        let full_output = self.egui_ctx.run(raw_input, |ctx| match &self.failure {
            Some(message) => draw_failure(ctx, message),
            None => {
                if self.hud.visible {
                    hud_actions = draw_hud(ctx, &mut self.hud);
                }
                draw_help_overlay(ctx, dragging);
            }
        });

        self.handle_hud_actions(hud_actions);

        let Some(gpu) = &mut self.gpu else { return };
        let Some(window) = &self.window else { return };
        let Some(egui_state) = &mut self.egui_state else {
            return;
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return;
        };

        egui_state.handle_platform_output(window, full_output.platform_output);

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated, reconfiguring");
                gpu.resize(gpu.size);
                window.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory");
                event_loop.exit();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("timed out acquiring the next frame");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, delta) in full_output.textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        let overlay_load = match &self.scene {
            Some(scene) => {
                scene.update_transform(&gpu.queue, self.trackball.view_matrix());
                scene.render(gpu, &view, &mut encoder);
                wgpu::LoadOp::Load
            }
            None => wgpu::LoadOp::Clear(self.config.view.clear_color),
        };

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: overlay_load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        let repaint_now = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if repaint_now {
            window.request_redraw();
        }
    }

    fn handle_hud_actions(&mut self, actions: HudActions) {
        if actions.reset_view {
            self.trackball.reset();
        }

        if let Some(mode) = actions.strip_mode {
            if let Some(scene) = &mut self.scene {
                log::debug!("strip mode -> {:?}", mode);
                scene.strip_mode = mode;
            }
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyR => {
                self.trackball.reset();
                self.request_redraw();
            }
            KeyCode::KeyH => {
                self.hud.visible = !self.hud.visible;
                self.request_redraw();
            }
            _ => {}
        }
    }

    /// A release always ends the drag, even when it lands on an egui area.
    /// A press starts one only off the overlay and once the cursor is known.
    fn on_left_button(&mut self, state: ElementState, egui_consumed: bool) {
        match state {
            ElementState::Pressed => {
                if let (false, Some(cursor)) = (egui_consumed, self.cursor) {
                    self.trackball.begin_drag(cursor);
                }
            }
            ElementState::Released => {
                if self.trackball.is_dragging() {
                    self.trackball.end_drag();
                    self.request_redraw();
                }
            }
        }
    }

    fn on_cursor_moved(&mut self, position: Vec2) {
        self.cursor = Some(position);
        if self.trackball.drag_to(position) {
            self.request_redraw();
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Without a device nothing can be drawn, so the window title carries the
/// message instead of the overlay.
fn failure_title(title: &str, message: &str, has_device: bool) -> Option<String> {
    (!has_device).then(|| format!("{} - {}", title, message))
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title)
            .with_inner_size(PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(err.into());
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window.clone());
        if let Err(err) = self.init(window.clone()) {
            self.fail(err);
        }

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let mut egui_consumed = false;
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }
            egui_consumed = response.consumed;
        }

        // the trackball sees pointer events whether or not egui took them
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.on_left_button(state, egui_consumed);
                return;
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                return;
            }
            _ if egui_consumed => return,
            _ => {}
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
                if let Some(scene) = &mut self.scene {
                    scene
                        .transform
                        .set_aspect(size.width as f32, size.height as f32);
                }
                self.trackball
                    .set_viewport(size.width as f32, size.height as f32);
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        self.handle_key(event_loop, key);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.render(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(ViewerConfig::default());
    event_loop.run_app(&mut app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(ViewerConfig::default());
        app.trackball.set_viewport(800.0, 800.0);
        app
    }

    #[test]
    fn test_release_over_overlay_ends_drag() {
        let mut app = app();
        app.on_cursor_moved(Vec2::new(400.0, 400.0));
        app.on_left_button(ElementState::Pressed, false);
        assert!(app.trackball.is_dragging());

        // dragged onto the HUD, egui takes the release
        app.on_cursor_moved(Vec2::new(30.0, 30.0));
        app.on_left_button(ElementState::Released, true);
        assert!(!app.trackball.is_dragging());

        let settled = app.trackball.view_matrix();
        app.on_cursor_moved(Vec2::new(600.0, 500.0));
        assert!(app.trackball.view_matrix().abs_diff_eq(settled, 1e-6));
    }

    #[test]
    fn test_press_before_any_cursor_position_is_ignored() {
        let mut app = app();
        app.on_left_button(ElementState::Pressed, false);
        assert!(!app.trackball.is_dragging());

        app.on_cursor_moved(Vec2::new(500.0, 400.0));
        assert!(app.trackball.view_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_press_on_overlay_does_not_start_drag() {
        let mut app = app();
        app.on_cursor_moved(Vec2::new(30.0, 30.0));
        app.on_left_button(ElementState::Pressed, true);
        assert!(!app.trackball.is_dragging());
    }

    #[test]
    fn test_title_carries_failure_only_without_device() {
        let message = SetupError::NoAdapter.user_message();
        assert_eq!(
            failure_title("Elliptic Supertoroid", &message, false).as_deref(),
            Some("Elliptic Supertoroid - Sorry, could not get a graphics context.")
        );

        let message = SetupError::Link("location 3 not provided".to_string()).user_message();
        assert_eq!(failure_title("Elliptic Supertoroid", &message, true), None);
    }

    #[test]
    fn test_failure_is_kept_for_overlay() {
        let mut app = app();
        app.fail(SetupError::VertexShader("unexpected token".to_string()));
        assert!(app.failure.as_deref().is_some_and(|m| m.ends_with("Error in vertex shader: unexpected token")));
    }

    #[test]
    fn test_drag_rotates_until_release() {
        let mut app = app();
        app.on_cursor_moved(Vec2::new(400.0, 400.0));
        app.on_left_button(ElementState::Pressed, false);
        app.on_cursor_moved(Vec2::new(500.0, 400.0));
        assert!(!app.trackball.view_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-4));

        app.on_left_button(ElementState::Released, false);
        assert!(!app.trackball.is_dragging());
    }
}
