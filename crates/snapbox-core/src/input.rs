//! Input events and pointer state tracking.

use crate::geometry::IPoint;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// An input event delivered to the scene.
///
/// Components only react to the pointer variants; scroll and key events are
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: IPoint,
        button: MouseButton,
    },
    PointerUp {
        position: IPoint,
        button: MouseButton,
    },
    PointerMove {
        position: IPoint,
    },
    Scroll {
        position: IPoint,
        delta: Vec2,
    },
    Key(KeyEvent),
}

impl InputEvent {
    /// Pointer position carried by the event, if it has one.
    pub fn position(&self) -> Option<IPoint> {
        match self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. }
            | InputEvent::PointerMove { position }
            | InputEvent::Scroll { position, .. } => Some(*position),
            InputEvent::Key(_) => None,
        }
    }
}

/// Tracks pointer and modifier state between events.
///
/// Windowing systems usually report button presses without a position, so
/// the host feeds cursor moves and button changes through this type and gets
/// back fully-formed [`InputEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position.
    pub pointer_position: IPoint,
    /// Current modifier keys state.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move.
    pub fn pointer_moved(&mut self, position: IPoint) -> InputEvent {
        self.pointer_position = position;
        InputEvent::PointerMove { position }
    }

    /// Record a button press at the last known pointer position.
    pub fn button_pressed(&self, button: MouseButton) -> InputEvent {
        InputEvent::PointerDown {
            position: self.pointer_position,
            button,
        }
    }

    /// Record a button release at the last known pointer position.
    pub fn button_released(&self, button: MouseButton) -> InputEvent {
        InputEvent::PointerUp {
            position: self.pointer_position,
            button,
        }
    }

    /// Update modifier keys state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_uses_last_position() {
        let mut input = InputState::new();
        input.pointer_moved(IPoint::new(40, 60));

        let event = input.button_pressed(MouseButton::Left);
        assert_eq!(
            event,
            InputEvent::PointerDown {
                position: IPoint::new(40, 60),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_button_release() {
        let mut input = InputState::new();
        input.button_pressed(MouseButton::Left);
        input.pointer_moved(IPoint::new(5, 5));

        let event = input.button_released(MouseButton::Left);
        assert_eq!(
            event,
            InputEvent::PointerUp {
                position: IPoint::new(5, 5),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_modifiers() {
        let mut input = InputState::new();
        assert!(!input.modifiers.ctrl);
        input.set_modifiers(Modifiers {
            ctrl: true,
            ..Default::default()
        });
        assert!(input.modifiers.ctrl);
    }

    #[test]
    fn test_key_event_has_no_position() {
        let event = InputEvent::Key(KeyEvent::Pressed("r".to_string()));
        assert_eq!(event.position(), None);
    }
}
