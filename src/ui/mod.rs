mod button;

pub use button::Button;

use macroquad::prelude::{Color, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

pub const GRID_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #cccccc
pub const DEAD_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const ALIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Distance between the top-left corners of neighboring cells
pub fn cell_pitch(cell_size: f32) -> f32 {
    cell_size + 1.0
}

/// Pixel size of a grid of `cells` cells including the outer line
pub fn grid_extent(cells: u32, cell_size: f32) -> f32 {
    cell_pitch(cell_size) * cells as f32 + 1.0
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Actions bound to the panel buttons, in layout order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Clean,
    Reset,
    Random,
}

/// Create UI buttons with standard layout
pub fn create_buttons(is_running: bool) -> Vec<(ButtonAction, Button)> {
    let px = panel_x();
    let play_label = if is_running { "Pause" } else { "Play" };
    vec![
        (ButtonAction::PlayPause, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, play_label)),
        (ButtonAction::Clean, Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clean")),
        (ButtonAction::Reset, Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset")),
        (ButtonAction::Random, Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random")),
    ]
}
