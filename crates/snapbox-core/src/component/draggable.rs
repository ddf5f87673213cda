//! Draggable colored rectangle.

use super::{ComponentId, ComponentTrait, RgbaColor};
use crate::geometry::{IPoint, IRect};
use crate::input::InputEvent;
use crate::surface::DrawSurface;
use uuid::Uuid;

/// Drag state of a [`DraggableRect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Being dragged. `offset` is the pointer position relative to the
    /// rectangle origin at grab time.
    Dragging { offset: IPoint },
}

/// A filled rectangle that can be grabbed and moved with the pointer.
#[derive(Debug, Clone)]
pub struct DraggableRect {
    id: ComponentId,
    rect: IRect,
    /// Fill color.
    pub color: RgbaColor,
    drag: DragState,
}

impl DraggableRect {
    /// Create a new draggable rectangle.
    pub fn new(rect: IRect, color: RgbaColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
            color,
            drag: DragState::Idle,
        }
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Grab offset, if currently dragging.
    pub fn drag_offset(&self) -> Option<IPoint> {
        match self.drag {
            DragState::Dragging { offset } => Some(offset),
            DragState::Idle => None,
        }
    }
}

impl ComponentTrait for DraggableRect {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn rect(&self) -> IRect {
        self.rect
    }

    fn set_rect(&mut self, rect: IRect) {
        self.rect = rect;
    }

    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { position, .. } if self.rect.contains(position) => {
                self.drag = DragState::Dragging {
                    offset: position - self.rect.origin(),
                };
                true
            }
            InputEvent::PointerUp { .. } => {
                // Release never consumes, so every rectangle gets to see it.
                self.drag = DragState::Idle;
                false
            }
            InputEvent::PointerMove { position } => match self.drag {
                DragState::Dragging { offset } => {
                    self.rect = self.rect.with_origin(position - offset);
                    true
                }
                DragState::Idle => false,
            },
            _ => false,
        }
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        surface.set_draw_color(self.color);
        surface.fill_rect(self.rect);
    }

    fn contains_point(&self, point: IPoint) -> bool {
        self.rect.contains(point)
    }

    fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, MouseButton};
    use crate::surface::{DrawCommand, RecordingSurface};

    fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            position: IPoint::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerUp {
            position: IPoint::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn moved(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMove {
            position: IPoint::new(x, y),
        }
    }

    fn sample() -> DraggableRect {
        DraggableRect::new(IRect::new(10, 20, 100, 50), RgbaColor::opaque(200, 10, 10))
    }

    #[test]
    fn test_grab_records_offset() {
        let mut rect = sample();
        assert!(rect.handle_event(&down(30, 45)));
        assert!(rect.is_dragging());
        assert_eq!(rect.drag_offset(), Some(IPoint::new(20, 25)));
    }

    #[test]
    fn test_move_keeps_grip_point() {
        let mut rect = sample();
        rect.handle_event(&down(30, 45));

        assert!(rect.handle_event(&moved(130, 245)));
        assert_eq!(rect.rect(), IRect::new(110, 220, 100, 50));

        // Negative positions are not clamped
        assert!(rect.handle_event(&moved(0, 0)));
        assert_eq!(rect.rect(), IRect::new(-20, -25, 100, 50));
    }

    #[test]
    fn test_press_while_dragging_regrabs() {
        let mut rect = sample();
        rect.handle_event(&down(30, 45));
        rect.handle_event(&moved(130, 245));

        // Any button, inside the moved rectangle
        let press = InputEvent::PointerDown {
            position: IPoint::new(115, 225),
            button: MouseButton::Right,
        };
        assert!(rect.handle_event(&press));
        assert_eq!(rect.drag_offset(), Some(IPoint::new(5, 5)));

        assert!(rect.handle_event(&moved(200, 200)));
        assert_eq!(rect.rect(), IRect::new(195, 195, 100, 50));
    }

    #[test]
    fn test_press_outside_while_dragging_keeps_grip() {
        let mut rect = sample();
        rect.handle_event(&down(30, 45));
        assert!(!rect.handle_event(&down(500, 500)));
        assert_eq!(rect.drag_offset(), Some(IPoint::new(20, 25)));
    }

    #[test]
    fn test_release_anywhere_ends_drag() {
        let mut rect = sample();
        rect.handle_event(&down(30, 45));

        assert!(!rect.handle_event(&up(900, 900)));
        assert!(!rect.is_dragging());
        assert_eq!(rect.drag_state(), DragState::Idle);

        // Moves after release are ignored
        assert!(!rect.handle_event(&moved(500, 500)));
        assert_eq!(rect.rect(), IRect::new(10, 20, 100, 50));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut rect = sample();
        assert!(!rect.handle_event(&down(5, 5)));
        assert!(!rect.is_dragging());
        // Right edge is outside
        assert!(!rect.handle_event(&down(110, 30)));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut rect = sample();
        assert!(!rect.handle_event(&moved(30, 30)));
        assert_eq!(rect.rect(), IRect::new(10, 20, 100, 50));
    }

    #[test]
    fn test_other_events_are_ignored() {
        let mut rect = sample();
        rect.handle_event(&down(30, 45));
        assert!(!rect.handle_event(&InputEvent::Key(KeyEvent::Pressed("a".to_string()))));
        assert!(rect.is_dragging());
    }

    #[test]
    fn test_render_fills_rect_with_color() {
        let rect = sample();
        let mut surface = RecordingSurface::new();
        rect.render(&mut surface);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::SetColor(RgbaColor::opaque(200, 10, 10)),
                DrawCommand::FillRect(IRect::new(10, 20, 100, 50)),
            ]
        );
    }

    #[test]
    fn test_contains_point() {
        let rect = sample();
        assert!(rect.contains_point(IPoint::new(10, 20)));
        assert!(!rect.contains_point(IPoint::new(9, 20)));
    }
}
