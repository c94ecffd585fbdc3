mod cell;
mod rules;
mod patterns;
mod universe;
pub mod error;

pub use cell::Cell;
pub use universe::{Universe, DEFAULT_HEIGHT, DEFAULT_WIDTH, PARALLEL_THRESHOLD};
pub use rules::{Rule, RuleKind, ConwayRule, HighLifeRule};
pub use patterns::{Pattern, presets};
pub use error::UniverseError;
