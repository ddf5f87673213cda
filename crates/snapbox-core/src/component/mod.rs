//! Component definitions for the scene.

mod draggable;
mod panel;

pub use draggable::DraggableRect;
pub use panel::Panel;

use crate::geometry::{IPoint, IRect};
use crate::input::InputEvent;
use crate::surface::DrawSurface;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from three channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for RgbaColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<RgbaColor> for Color {
    fn from(color: RgbaColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Unique identifier for components.
pub type ComponentId = Uuid;

/// Capabilities shared by every component.
///
/// Everything except identity and geometry has a do-nothing default, so a
/// purely decorative component only has to provide its rectangle.
pub trait ComponentTrait {
    /// Get the unique identifier.
    fn id(&self) -> ComponentId;

    /// Get the bounding rectangle.
    fn rect(&self) -> IRect;

    /// Replace the bounding rectangle. No validation is performed.
    fn set_rect(&mut self, rect: IRect);

    /// Offer an input event to the component.
    /// Returns true if the component was the target and consumed it.
    fn handle_event(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// Per-frame update hook.
    fn update(&mut self) {}

    /// Draw the component.
    fn render(&self, _surface: &mut dyn DrawSurface) {}

    /// Hit test against a surface position.
    fn contains_point(&self, _point: IPoint) -> bool {
        false
    }

    /// Check if the component is currently being dragged.
    fn is_dragging(&self) -> bool {
        false
    }
}

/// Enum wrapper for all component types.
///
/// Cloning produces an independent copy with the same id, rectangle, color
/// and drag state.
#[derive(Debug, Clone)]
pub enum Component {
    Draggable(DraggableRect),
    Panel(Panel),
}

impl Component {
    pub fn id(&self) -> ComponentId {
        match self {
            Component::Draggable(c) => c.id(),
            Component::Panel(c) => c.id(),
        }
    }

    pub fn rect(&self) -> IRect {
        match self {
            Component::Draggable(c) => c.rect(),
            Component::Panel(c) => c.rect(),
        }
    }

    pub fn set_rect(&mut self, rect: IRect) {
        match self {
            Component::Draggable(c) => c.set_rect(rect),
            Component::Panel(c) => c.set_rect(rect),
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match self {
            Component::Draggable(c) => c.handle_event(event),
            Component::Panel(c) => c.handle_event(event),
        }
    }

    pub fn update(&mut self) {
        match self {
            Component::Draggable(c) => c.update(),
            Component::Panel(c) => c.update(),
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            Component::Draggable(c) => c.render(surface),
            Component::Panel(c) => c.render(surface),
        }
    }

    pub fn contains_point(&self, point: IPoint) -> bool {
        match self {
            Component::Draggable(c) => c.contains_point(point),
            Component::Panel(c) => c.contains_point(point),
        }
    }

    pub fn is_dragging(&self) -> bool {
        match self {
            Component::Draggable(c) => c.is_dragging(),
            Component::Panel(c) => c.is_dragging(),
        }
    }
}

impl From<DraggableRect> for Component {
    fn from(rect: DraggableRect) -> Self {
        Component::Draggable(rect)
    }
}

impl From<Panel> for Component {
    fn from(panel: Panel) -> Self {
        Component::Panel(panel)
    }
}
