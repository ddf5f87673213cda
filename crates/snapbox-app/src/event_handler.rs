//! Translation of window events into scene input and shortcuts.

use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use kurbo::{Point, Vec2};
use snapbox_core::{IPoint, InputEvent, InputState, KeyEvent, Modifiers, MouseButton};
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta};
use winit::keyboard::{Key, ModifiersState};

/// Result of translating a window event.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Forward to the scene.
    Input(InputEvent),
    /// Handled by the application itself.
    Shortcut(ShortcutAction),
}

/// Tracks pointer and modifier state between window events.
#[derive(Debug, Clone)]
pub struct EventHandler {
    input: InputState,
    /// Physical to logical pixel ratio of the window.
    scale_factor: f64,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl EventHandler {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            input: InputState::new(),
            scale_factor,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Cursor moved to a physical position.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        let logical = Point::new(x / self.scale_factor, y / self.scale_factor);
        self.input.pointer_moved(IPoint::from_kurbo(logical))
    }

    /// Mouse button pressed or released at the last cursor position.
    /// Buttons other than left, right and middle are ignored.
    pub fn mouse_input(&mut self, state: ElementState, button: WinitButton) -> Option<InputEvent> {
        let button = match button {
            WinitButton::Left => MouseButton::Left,
            WinitButton::Right => MouseButton::Right,
            WinitButton::Middle => MouseButton::Middle,
            _ => return None,
        };

        Some(match state {
            ElementState::Pressed => self.input.button_pressed(button),
            ElementState::Released => self.input.button_released(button),
        })
    }

    pub fn mouse_wheel(&mut self, delta: MouseScrollDelta) -> InputEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x as f64, y as f64),
            MouseScrollDelta::PixelDelta(pos) => {
                Vec2::new(pos.x / self.scale_factor, pos.y / self.scale_factor)
            }
        };
        InputEvent::Scroll {
            position: self.input.pointer_position,
            delta,
        }
    }

    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        self.input.set_modifiers(Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        });
    }

    /// Key pressed or released. Presses that match a shortcut become
    /// [`AppEvent::Shortcut`]; everything else is forwarded as a key event.
    pub fn keyboard_input(&mut self, state: ElementState, key: &Key) -> Option<AppEvent> {
        let name = key_name(key)?;

        match state {
            ElementState::Pressed => {
                if let Some(action) = ShortcutRegistry::find(&name, self.input.modifiers) {
                    return Some(AppEvent::Shortcut(action));
                }
                Some(AppEvent::Input(InputEvent::Key(KeyEvent::Pressed(name))))
            }
            ElementState::Released => {
                Some(AppEvent::Input(InputEvent::Key(KeyEvent::Released(name))))
            }
        }
    }
}

fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_string()),
        Key::Named(named) => Some(format!("{named:?}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NamedKey;

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)).as_deref(), Some("Escape"));
        assert_eq!(key_name(&Key::Character("r".into())).as_deref(), Some("r"));
    }

    #[test]
    fn test_cursor_moved_uses_logical_pixels() {
        let mut handler = EventHandler::new(2.0);
        let event = handler.cursor_moved(201.0, 99.0);
        assert_eq!(
            event,
            InputEvent::PointerMove {
                position: IPoint::new(100, 49)
            }
        );
    }

    #[test]
    fn test_press_uses_last_cursor_position() {
        let mut handler = EventHandler::default();
        handler.cursor_moved(30.0, 40.0);

        let down = handler.mouse_input(ElementState::Pressed, WinitButton::Left);
        assert_eq!(
            down,
            Some(InputEvent::PointerDown {
                position: IPoint::new(30, 40),
                button: MouseButton::Left
            })
        );

        handler.cursor_moved(300.0, 10.0);
        let up = handler.mouse_input(ElementState::Released, WinitButton::Left);
        assert_eq!(
            up,
            Some(InputEvent::PointerUp {
                position: IPoint::new(300, 10),
                button: MouseButton::Left
            })
        );
    }

    #[test]
    fn test_extra_buttons_are_ignored() {
        let mut handler = EventHandler::default();
        assert_eq!(handler.mouse_input(ElementState::Pressed, WinitButton::Back), None);
    }

    #[test]
    fn test_ctrl_r_is_a_shortcut() {
        let mut handler = EventHandler::default();
        handler.modifiers_changed(ModifiersState::CONTROL);

        let event = handler.keyboard_input(ElementState::Pressed, &Key::Character("r".into()));
        assert_eq!(event, Some(AppEvent::Shortcut(ShortcutAction::AddRectangle)));
    }

    #[test]
    fn test_plain_r_is_forwarded() {
        let mut handler = EventHandler::default();
        let event = handler.keyboard_input(ElementState::Pressed, &Key::Character("r".into()));
        assert_eq!(
            event,
            Some(AppEvent::Input(InputEvent::Key(KeyEvent::Pressed("r".to_string()))))
        );
    }

    #[test]
    fn test_escape_quits() {
        let mut handler = EventHandler::default();
        let event = handler.keyboard_input(ElementState::Pressed, &Key::Named(NamedKey::Escape));
        assert_eq!(event, Some(AppEvent::Shortcut(ShortcutAction::Quit)));

        // Releasing is not a shortcut
        let event = handler.keyboard_input(ElementState::Released, &Key::Named(NamedKey::Escape));
        assert!(matches!(event, Some(AppEvent::Input(_))));
    }

    #[test]
    fn test_scroll_at_pointer() {
        let mut handler = EventHandler::default();
        handler.cursor_moved(5.0, 6.0);
        let event = handler.mouse_wheel(MouseScrollDelta::LineDelta(0.0, -1.0));
        assert_eq!(
            event,
            InputEvent::Scroll {
                position: IPoint::new(5, 6),
                delta: Vec2::new(0.0, -1.0)
            }
        );
    }
}
