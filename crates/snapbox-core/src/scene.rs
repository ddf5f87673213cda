//! Scene ownership, input dispatch and edge snapping.

use crate::component::{Component, ComponentId, RgbaColor};
use crate::geometry::IPoint;
use crate::input::InputEvent;
use crate::snap::{DEFAULT_PROXIMITY_THRESHOLD, SnapPolicy, snap_to_rect};
use crate::surface::DrawSurface;
use serde::{Deserialize, Serialize};

/// Tunable scene behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Maximum edge gap (in pixels) for two components to snap.
    pub threshold: i32,
    /// How several nearby neighbours are resolved in one snap pass.
    pub snap_policy: SnapPolicy,
    /// Move a component to the top of the paint order when it is grabbed.
    pub raise_on_grab: bool,
    /// Color the surface is cleared to before each frame.
    pub background: RgbaColor,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PROXIMITY_THRESHOLD,
            snap_policy: SnapPolicy::default(),
            raise_on_grab: false,
            background: RgbaColor::white(),
        }
    }
}

/// An ordered collection of components.
///
/// Storage order is paint order: the first component is drawn first (at the
/// back) and the last one is drawn on top. Input goes the other way, so the
/// topmost component under the pointer wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    components: Vec<Component>,
    config: SceneConfig,
}

impl Scene {
    /// Create an empty scene with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with the given configuration.
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            components: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SceneConfig {
        &mut self.config
    }

    /// Proximity threshold used by the snap pass.
    pub fn threshold(&self) -> i32 {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: i32) {
        self.config.threshold = threshold;
    }

    /// Add a component on top of all existing ones.
    pub fn add_component(&mut self, component: impl Into<Component>) -> ComponentId {
        let component = component.into();
        let id = component.id();
        log::debug!("Adding component {} at {:?}", id, component.rect());
        self.components.push(component);
        id
    }

    /// Dispatch an input event.
    ///
    /// Components are offered the event from topmost to bottommost until one
    /// consumes it. If that component is being dragged, it is snapped against
    /// every other component that is not itself being dragged.
    ///
    /// Returns true if a component consumed the event.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let mut consumed_by = None;
        for index in (0..self.components.len()).rev() {
            if self.components[index].handle_event(event) {
                consumed_by = Some(index);
                break;
            }
        }

        let Some(mut index) = consumed_by else {
            if matches!(event, InputEvent::PointerUp { .. }) {
                log::trace!("Pointer released at {:?}", event.position());
            }
            return false;
        };

        if !self.components[index].is_dragging() {
            return true;
        }

        if matches!(event, InputEvent::PointerDown { .. }) {
            log::debug!(
                "Grabbed component {} at {:?}",
                self.components[index].id(),
                self.components[index].rect()
            );
            if self.config.raise_on_grab {
                index = self.move_to_end(index);
            }
        }

        self.snap_pass(index);
        true
    }

    /// Snap the component at `index` against its neighbours.
    fn snap_pass(&mut self, index: usize) {
        let threshold = self.config.threshold;

        match self.config.snap_policy {
            SnapPolicy::Sequential => {
                for other_index in 0..self.components.len() {
                    if other_index == index || self.components[other_index].is_dragging() {
                        continue;
                    }
                    let other = self.components[other_index].rect();
                    let current = self.components[index].rect();
                    if let Some((snapped, m)) = snap_to_rect(current, &other, threshold) {
                        log::trace!(
                            "Snapped {} to {:?} side of {} (gap {})",
                            self.components[index].id(),
                            m.side,
                            self.components[other_index].id(),
                            m.distance
                        );
                        self.components[index].set_rect(snapped);
                    }
                }
            }
            SnapPolicy::Nearest => {
                let current = self.components[index].rect();
                let best = self
                    .components
                    .iter()
                    .enumerate()
                    .filter(|(other_index, other)| *other_index != index && !other.is_dragging())
                    .filter_map(|(_, other)| snap_to_rect(current, &other.rect(), threshold))
                    .min_by_key(|(_, m)| m.distance);

                if let Some((snapped, m)) = best {
                    log::trace!(
                        "Snapped {} to {:?} side (gap {})",
                        self.components[index].id(),
                        m.side,
                        m.distance
                    );
                    self.components[index].set_rect(snapped);
                }
            }
        }
    }

    /// Run the per-frame update hook of every component.
    pub fn update(&mut self) {
        for component in &mut self.components {
            component.update();
        }
    }

    /// Draw a full frame: clear, draw every component back to front, present.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.set_draw_color(self.config.background);
        surface.clear();

        for component in &self.components {
            component.render(surface);
        }

        surface.present();
    }

    /// Move a component to the top of the paint order.
    /// Returns false if the id is unknown.
    pub fn bring_to_front(&mut self, id: ComponentId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.move_to_end(index);
                true
            }
            None => false,
        }
    }

    fn move_to_end(&mut self, index: usize) -> usize {
        let component = self.components.remove(index);
        self.components.push(component);
        self.components.len() - 1
    }

    /// Components in paint order (back to front).
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get a component by ID.
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Position of a component in paint order.
    pub fn index_of(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    /// Topmost component whose hit test contains `point`.
    pub fn component_at(&self, point: IPoint) -> Option<ComponentId> {
        self.components
            .iter()
            .rev()
            .find(|c| c.contains_point(point))
            .map(Component::id)
    }

    /// The topmost component currently being dragged, if any.
    pub fn dragging(&self) -> Option<ComponentId> {
        self.components
            .iter()
            .rev()
            .find(|c| c.is_dragging())
            .map(Component::id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
