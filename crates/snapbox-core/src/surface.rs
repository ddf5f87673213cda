//! Drawing surface abstraction.
//!
//! The scene and its components only need four primitive operations from
//! whatever backend ends up putting pixels on screen.

use crate::component::RgbaColor;
use crate::geometry::IRect;

/// Primitive drawing operations provided by a render backend.
pub trait DrawSurface {
    /// Set the color used by subsequent `fill_rect` and `clear` calls.
    fn set_draw_color(&mut self, color: RgbaColor);

    /// Fill a rectangle with the current draw color.
    fn fill_rect(&mut self, rect: IRect);

    /// Fill the whole surface with the current draw color.
    fn clear(&mut self);

    /// Hand the completed frame to the display.
    fn present(&mut self);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(RgbaColor),
    FillRect(IRect),
    Clear,
    Present,
}

/// A surface that records every call instead of drawing.
///
/// Useful for headless runs and for checking paint order in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames_presented: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames presented.
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}

impl DrawSurface for RecordingSurface {
    fn set_draw_color(&mut self, color: RgbaColor) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, rect: IRect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands() {
        let mut surface = RecordingSurface::new();
        surface.set_draw_color(RgbaColor::white());
        surface.clear();
        surface.fill_rect(IRect::new(0, 0, 10, 10));
        surface.present();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::SetColor(RgbaColor::white()),
                DrawCommand::Clear,
                DrawCommand::FillRect(IRect::new(0, 0, 10, 10)),
                DrawCommand::Present,
            ]
        );
        assert_eq!(surface.frames_presented(), 1);
    }
}
