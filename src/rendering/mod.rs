use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Universe, presets};
use crate::ui::{
    ALIVE_COLOR, Button, ButtonAction, DEAD_COLOR, GRID_COLOR, PANEL_WIDTH, cell_pitch,
    grid_extent, panel_x,
};

/// Draw the grid lines around every cell
pub fn draw_grid(universe: &Universe, cell_size: f32) {
    let pitch = cell_pitch(cell_size);
    let (width, height) = (universe.width(), universe.height());
    let total_width = grid_extent(width, cell_size);
    let total_height = grid_extent(height, cell_size);

    for column in 0..=width {
        let x = column as f32 * pitch + 0.5;
        draw_line(x, 0.0, x, total_height, 1.0, GRID_COLOR);
    }
    for row in 0..=height {
        let y = row as f32 * pitch + 0.5;
        draw_line(0.0, y, total_width, y, 1.0, GRID_COLOR);
    }
}

/// Fill every cell from the universe's byte view
pub fn draw_cells(universe: &Universe, cell_size: f32) {
    let pitch = cell_pitch(cell_size);
    let width = universe.width() as usize;

    for (idx, &byte) in universe.as_bytes().iter().enumerate() {
        let (row, column) = (idx / width, idx % width);
        let color = if byte == 0 { DEAD_COLOR } else { ALIVE_COLOR };
        draw_rectangle(
            column as f32 * pitch + 1.0,
            row as f32 * pitch + 1.0,
            cell_size,
            cell_size,
            color,
        );
    }
}

/// Draw the control panel with buttons and status
pub fn draw_controls(state: &GameState, buttons: &[(ButtonAction, Button)], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let universe = &state.universe;
    let (glider, spaceship) = (presets::glider(), presets::spaceship());
    let labels = [
        (format!("Grid: {}x{}", universe.width(), universe.height()), 240.0),
        (format!("Alive: {}", universe.live_count()), 260.0),
        (format!("Generation: {}", state.generation), 280.0),
        (format!("Speed: {:.0} gen/s", state.ticks_per_second), 300.0),
        (format!("Rule: {} {}", state.rule.name(), state.rule.notation()), 320.0),
        ("Click: toggle".to_owned(), 350.0),
        (format!("Ctrl+click: {}", glider.name), 365.0),
        (format!("  {}", glider.description), 380.0),
        (format!("Shift+click: {}", spaceship.name), 395.0),
        (format!("  {}", spaceship.description), 410.0),
        ("Space: play  S: step".to_owned(), 430.0),
        ("C: clean  R: reset  N: random".to_owned(), 445.0),
        ("L: next rule".to_owned(), 460.0),
    ];

    labels.iter().for_each(|(text, y)| {
        draw_text(text, px + 5.0, *y, 14.0, LIGHTGRAY);
    });
}
