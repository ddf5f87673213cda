//! Static, non-interactive filled rectangle.

use super::{ComponentId, ComponentTrait, RgbaColor};
use crate::geometry::IRect;
use crate::surface::DrawSurface;
use uuid::Uuid;

/// A decorative rectangle. It draws itself and acts as a snap target, but
/// never takes input.
#[derive(Debug, Clone)]
pub struct Panel {
    id: ComponentId,
    rect: IRect,
    /// Fill color.
    pub color: RgbaColor,
}

impl Panel {
    pub fn new(rect: IRect, color: RgbaColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
            color,
        }
    }
}

impl ComponentTrait for Panel {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn rect(&self) -> IRect {
        self.rect
    }

    fn set_rect(&mut self, rect: IRect) {
        self.rect = rect;
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        surface.set_draw_color(self.color);
        surface.fill_rect(self.rect);
    }
}
