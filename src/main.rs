use std::sync::OnceLock;

use anyhow::Context;
use macroquad::prelude::*;
use tracing::{error, info};

use life_universe::{
    Config, GameState,
    input, logging, rendering,
    ui::{self, grid_extent},
};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Loaded on first use; `window_conf` runs before `main`, so logging starts here
fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        logging::init_logging();
        Config::load_or_default()
    })
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: (grid_extent(config.width, config.cell_size) + ui::PANEL_WIDTH) as i32,
        window_height: grid_extent(config.height, config.cell_size).max(480.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config();
    let mut state = GameState::new(config).context("invalid universe size in config")?;
    info!(width = config.width, height = config.height, "starting viewer");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(state.is_running);
        let grid_area = (
            grid_extent(state.universe.width(), config.cell_size).min(ui::panel_x()),
            grid_extent(state.universe.height(), config.cell_size),
        );

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_grid_click(&mut state, mouse_pos, config.cell_size, grid_area);
        state = input::process_keyboard_input(state);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.universe, config.cell_size);
        rendering::draw_cells(&state.universe, config.cell_size);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
