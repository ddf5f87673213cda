//! The scene together with the settings used to populate it.

use crate::config::{AppConfig, Extent};
use crate::palette::{random_color, random_rect};
use rand::rngs::StdRng;
use snapbox_core::{ComponentId, DraggableRect, InputEvent, Scene, SnapPolicy};

/// Owns the scene and the random source for new rectangles.
pub struct Sandbox {
    scene: Scene,
    /// Area in which new rectangles are placed.
    spawn_area: Extent,
    /// Size of new rectangles.
    spawn_size: Extent,
    rng: StdRng,
}

impl Sandbox {
    /// Create a sandbox holding the configured initial rectangles, each with
    /// a random color.
    pub fn new(config: &AppConfig, mut rng: StdRng) -> Self {
        let mut scene = Scene::with_config(config.scene_config());

        for rect in &config.initial_rects {
            if rect.width < 0 || rect.height < 0 {
                log::warn!("Skipping initial rectangle with negative size: {:?}", rect);
                continue;
            }
            scene.add_component(DraggableRect::new(*rect, random_color(&mut rng)));
        }

        Self {
            scene,
            spawn_area: config.spawn_area,
            spawn_size: config.spawn_size,
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Dispatch an input event to the scene.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.scene.handle_event(event)
    }

    /// Add a rectangle of the configured spawn size at a random position.
    pub fn add_random_rect(&mut self) -> ComponentId {
        let rect = random_rect(&mut self.rng, self.spawn_area, self.spawn_size);
        let color = random_color(&mut self.rng);
        let id = self.scene.add_component(DraggableRect::new(rect, color));
        log::info!("Added rectangle at {:?} ({} total)", rect, self.scene.len());
        id
    }

    /// Switch to the other snap policy and return it.
    pub fn toggle_snap_policy(&mut self) -> SnapPolicy {
        let config = self.scene.config_mut();
        config.snap_policy = config.snap_policy.next();
        log::info!("Snap policy: {}", config.snap_policy.name());
        config.snap_policy
    }
}
