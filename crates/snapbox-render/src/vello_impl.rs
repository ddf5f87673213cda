//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{Affine, Rect, Size};
use peniko::{Color, Fill};
use snapbox_core::{DrawSurface, IRect, RgbaColor};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
///
/// Implements [`DrawSurface`], so the sandbox scene draws straight into a
/// Vello scene. A presented frame is parked until the windowing layer takes
/// it with [`VelloRenderer::take_frame`].
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Last presented frame, waiting to be submitted to the GPU.
    presented: Option<Scene>,
    /// Color for the next fill or clear.
    draw_color: Color,
    /// Scene to viewport transform.
    transform: Affine,
    /// Viewport size in physical pixels.
    viewport_size: Size,
    frames_presented: u64,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            presented: None,
            draw_color: RgbaColor::black().into(),
            transform: Affine::IDENTITY,
            viewport_size: Size::ZERO,
            frames_presented: 0,
        }
    }

    /// Get the scene currently being built.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the last presented frame.
    ///
    /// Fails with [`RendererError::RenderFailed`] if nothing was presented
    /// since the previous call.
    pub fn take_frame(&mut self) -> RenderResult<Scene> {
        self.presented
            .take()
            .ok_or_else(|| RendererError::RenderFailed("no frame presented".to_string()))
    }

    /// Set the area filled by `clear`.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Number of frames presented since creation.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DrawSurface for VelloRenderer {
    fn set_draw_color(&mut self, color: RgbaColor) {
        self.draw_color = color.into();
    }

    fn fill_rect(&mut self, rect: IRect) {
        if rect.is_empty() {
            return;
        }
        self.scene.fill(
            Fill::NonZero,
            self.transform,
            self.draw_color,
            None,
            &rect.to_kurbo(),
        );
    }

    fn clear(&mut self) {
        self.scene.reset();
        let viewport = Rect::from_origin_size((0.0, 0.0), self.viewport_size);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, self.draw_color, None, &viewport);
    }

    fn present(&mut self) {
        if self.presented.is_some() {
            log::trace!("Dropping frame that was never submitted");
        }
        self.presented = Some(std::mem::take(&mut self.scene));
        self.frames_presented += 1;
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.viewport_size = ctx.viewport_size;
        self.transform = ctx.transform();
        ctx.scene.render(self);
    }
}
