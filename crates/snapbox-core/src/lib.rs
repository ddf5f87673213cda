//! Snapbox Core Library
//!
//! Platform-agnostic scene model for the Snapbox sandbox: components, input
//! events, edge snapping and the drawing surface abstraction.

pub mod component;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod snap;
pub mod surface;

pub use component::{Component, ComponentId, ComponentTrait, DraggableRect, Panel, RgbaColor};
pub use geometry::{IPoint, IRect};
pub use input::{InputEvent, InputState, KeyEvent, Modifiers, MouseButton};
pub use scene::{Scene, SceneConfig};
pub use snap::{
    DEFAULT_PROXIMITY_THRESHOLD, RectSide, SideMatch, SnapPolicy, is_diagonal, is_near,
    nearest_side, snap_rect, snap_to_rect, which_side_is_near,
};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
