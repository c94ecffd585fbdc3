mod config;
mod game_state;

pub use config::{Config, ConfigError, CONFIG_ENV};
pub use game_state::{ClickModifier, GameState};
