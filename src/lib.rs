// Domain layer - the universe engine
pub mod domain;

// Application layer - config and the control loop
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, Universe, UniverseError, Pattern, presets};
pub use application::{Config, GameState, ClickModifier};
