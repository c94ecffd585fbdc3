use tracing::{debug, warn};

use crate::application::Config;
use crate::domain::{RuleKind, Universe, error::Result};

/// Keyboard modifier held during a click on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClickModifier {
    /// Plain click toggles one cell
    #[default]
    None,
    /// Ctrl-click stamps a glider
    Control,
    /// Shift-click stamps a spaceship
    Shift,
}

/// GameState owns the universe and drives it from the frame loop.
pub struct GameState {
    pub universe: Universe,
    pub rule: RuleKind,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub ticks_per_second: f32,
    pub random_density: f64,
}

impl GameState {
    /// Build the starting universe described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            universe: Universe::with_size(config.width, config.height)?,
            rule: config.rule,
            is_running: config.start_running,
            generation: 0,
            update_timer: 0.0,
            ticks_per_second: config.ticks_per_second.clamp(1.0, 60.0),
            random_density: config.random_density,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!(running = self.is_running, "toggled play state");
        self
    }

    /// Kill every cell, keeping the generation count and play state
    pub fn clean(mut self) -> Self {
        self.universe.clean();
        self
    }

    /// Drop the universe and start over with the initial pattern
    pub fn reset(mut self) -> Self {
        self.universe = self.universe.fresh();
        self.generation = 0;
        self.update_timer = 0.0;
        debug!("universe reset");
        self
    }

    /// Fill the universe with random cells
    pub fn randomize(mut self) -> Self {
        self.universe.randomize(self.random_density, &mut rand::rng());
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.ticks_per_second = (self.ticks_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Switch to the next rule; the cells are kept
    pub fn cycle_rule(mut self) -> Self {
        self.rule = self.rule.next();
        debug!(rule = self.rule.name(), "changed rule");
        self
    }

    /// Advance exactly one generation under the current rule
    pub fn step(mut self) -> Self {
        self.universe.step_with(self.rule.rule());
        self.generation += 1;
        self
    }

    /// Update simulation by one frame of `delta_time` seconds
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.ticks_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            return self.step();
        }

        self
    }

    /// Apply a click on cell (row, column)
    pub fn click(&mut self, row: u32, column: u32, modifier: ClickModifier) {
        let result = match modifier {
            ClickModifier::None => self.universe.toggle_cell(row, column),
            ClickModifier::Control => self.universe.create_glider(row, column),
            ClickModifier::Shift => self.universe.create_spaceship(row, column),
        };

        if let Err(err) = result {
            warn!(%err, ?modifier, "ignored click");
        }
    }
}
