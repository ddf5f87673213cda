//! Core application state and lifecycle.

use crate::config::{AppConfig, ConfigError};
use crate::event_handler::{AppEvent, EventHandler};
use crate::sandbox::Sandbox;
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use kurbo::Size;
use rand::SeedableRng;
use rand::rngs::StdRng;
use snapbox_render::{RenderContext, RenderResult, Renderer, RendererError, VelloRenderer};
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Renderer error: {0}")]
    Renderer(#[from] RendererError),
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // State
    sandbox: Sandbox,
    event_handler: EventHandler,
}

impl AppState {
    /// Update the scene, build a frame and present it on the window surface.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> RenderResult<()> {
        self.sandbox.scene_mut().update();

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let ctx = RenderContext::new(self.sandbox.scene(), Size::new(width as f64, height as f64))
            .with_scale_factor(self.window.scale_factor());
        self.scene_renderer.build_scene(&ctx);
        let base_color = self.scene_renderer.background_color(&ctx);

        let scene = self.scene_renderer.take_frame()?;

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a storage-bindable Rgba8Unorm target
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let mut blit_encoder =
            device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("blit encoder"),
            });
        self.texture_blitter
            .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(blit_encoder.finish()));

        surface_texture.present();
        Ok(())
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error, reported once the event loop has exited.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application until the window is closed.
    pub async fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Create the window, GPU surface and renderers.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<AppState, AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(format!("window: {e}")))?,
        );

        log::info!("Window created, initializing renderer...");

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);

        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        // Vello renders to Rgba8Unorm; the surface format may differ
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let sandbox = Sandbox::new(&self.config, StdRng::from_entropy());

        log::info!(
            "SnapBox initialized - {}x{}, {} rectangles",
            surface.config.width,
            surface.config.height,
            sandbox.scene().len()
        );
        ShortcutRegistry::log_all();

        Ok(AppState {
            event_handler: EventHandler::new(window.scale_factor()),
            window,
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::new(),
            texture_blitter,
            sandbox,
        })
    }

    /// Record a fatal error and stop the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        match self.init(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                state.event_handler.set_scale_factor(scale_factor);
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };

                match state.redraw(render_cx) {
                    Ok(()) => {}
                    Err(e @ RendererError::Surface(_)) => log::warn!("Skipping frame: {e}"),
                    Err(e) => log::error!("{e}"),
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input = state.event_handler.cursor_moved(position.x, position.y);
                state.sandbox.handle_input(&input);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if let Some(input) = state.event_handler.mouse_input(button_state, button) {
                    state.sandbox.handle_input(&input);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let input = state.event_handler.mouse_wheel(delta);
                state.sandbox.handle_input(&input);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                state.event_handler.modifiers_changed(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let Some(app_event) = state
                    .event_handler
                    .keyboard_input(event.state, &event.logical_key)
                else {
                    return;
                };

                match app_event {
                    AppEvent::Input(input) => {
                        state.sandbox.handle_input(&input);
                    }
                    AppEvent::Shortcut(ShortcutAction::Quit) => {
                        log::info!("Quit requested");
                        event_loop.exit();
                    }
                    AppEvent::Shortcut(_) if event.repeat => {}
                    AppEvent::Shortcut(ShortcutAction::AddRectangle) => {
                        state.sandbox.add_random_rect();
                    }
                    AppEvent::Shortcut(ShortcutAction::ToggleSnapPolicy) => {
                        state.sandbox.toggle_snap_policy();
                    }
                }
            }

            _ => {}
        }
    }
}
