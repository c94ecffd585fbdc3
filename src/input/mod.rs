use macroquad::prelude::*;

use crate::application::{ClickModifier, GameState};
use crate::ui::{Button, ButtonAction, cell_pitch};

/// Map a pixel position on the grid to (row, column).
/// Positions past the last cell clamp to it; negative positions miss the grid.
pub fn pixel_to_cell(x: f32, y: f32, cell_size: f32, width: u32, height: u32) -> Option<(u32, u32)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let pitch = cell_pitch(cell_size);
    let row = ((y / pitch).floor() as u32).min(height - 1);
    let column = ((x / pitch).floor() as u32).min(width - 1);
    Some((row, column))
}

fn held_modifier() -> ClickModifier {
    if is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl) {
        ClickModifier::Control
    } else if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) {
        ClickModifier::Shift
    } else {
        ClickModifier::None
    }
}

/// Toggle or stamp at the clicked cell
pub fn handle_grid_click(state: &mut GameState, mouse_pos: (f32, f32), cell_size: f32, grid_area: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if mouse_pos.0 >= grid_area.0 || mouse_pos.1 >= grid_area.1 {
        return;
    }

    let (width, height) = (state.universe.width(), state.universe.height());
    if let Some((row, column)) = pixel_to_cell(mouse_pos.0, mouse_pos.1, cell_size, width, height) {
        state.click(row, column, held_modifier());
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clean),
        (KeyCode::R, GameState::reset),
        (KeyCode::N, GameState::randomize),
        (KeyCode::S, GameState::step),
        (KeyCode::L, GameState::cycle_rule),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (action, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match action {
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Clean => s.clean(),
            ButtonAction::Reset => s.reset(),
            ButtonAction::Random => s.randomize(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_cell_divides_by_pitch() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 10.0, 64, 64), Some((0, 0)));
        assert_eq!(pixel_to_cell(10.9, 0.0, 10.0, 64, 64), Some((0, 0)));
        assert_eq!(pixel_to_cell(11.0, 22.0, 10.0, 64, 64), Some((2, 1)));
    }

    #[test]
    fn test_pixel_to_cell_clamps_to_last_cell() {
        // the closing grid line sits one pixel past the last cell
        assert_eq!(pixel_to_cell(704.0, 704.0, 10.0, 64, 64), Some((63, 63)));
        assert_eq!(pixel_to_cell(5000.0, 3.0, 10.0, 8, 4), Some((0, 7)));
    }

    #[test]
    fn test_pixel_to_cell_rejects_negative() {
        assert_eq!(pixel_to_cell(-1.0, 5.0, 10.0, 64, 64), None);
        assert_eq!(pixel_to_cell(5.0, -0.5, 10.0, 64, 64), None);
    }
}
