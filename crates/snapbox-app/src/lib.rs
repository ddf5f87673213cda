//! SnapBox Application
//!
//! The application shell providing windowing, input handling,
//! and integration of all components.

mod app;
mod config;
mod event_handler;
mod palette;
mod sandbox;
mod shortcuts;

pub use app::{App, AppError};
pub use config::{AppConfig, CONFIG_ENV_VAR, ConfigError, Extent};
pub use event_handler::{AppEvent, EventHandler};
pub use palette::{random_color, random_rect};
pub use sandbox::Sandbox;
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
