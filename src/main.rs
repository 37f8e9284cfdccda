use macroquad::prelude::*;
use tracing::{error, info};

use life_panel::{
    AppConfig, DriverState, Engine, Preset,
    ui::{self, Dropdown},
    rendering, input,
};

fn window_conf() -> Conf {
    let config = AppConfig::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let config = AppConfig::default();
    let mut engine = match Engine::new(config.grid_width, config.grid_height) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "cannot start simulation");
            return;
        }
    };
    let mut state = DriverState::new(&config);
    if let Some(name) = config.initial_preset {
        state = state.apply_preset(&mut engine, name);
    }
    info!(
        width = config.grid_width,
        height = config.grid_height,
        speed = state.updates_per_second,
        "simulation ready"
    );

    let preset_items: Vec<String> = Preset::ALL.iter().map(|p| p.name().to_owned()).collect();
    let mut preset_dropdown = Dropdown::new(
        ui::panel_x() + ui::PANEL_MARGIN,
        480.0,
        ui::PANEL_WIDTH - 2.0 * ui::PANEL_MARGIN,
        "Preset",
        preset_items,
    );

    loop {
        let mouse_pos = mouse_position();

        // Widgets follow the panel when the window is resized
        preset_dropdown.set_position(ui::panel_x() + ui::PANEL_MARGIN, 480.0);
        let buttons = ui::create_buttons(state.is_running);
        let slider = ui::create_speed_slider();

        // Clicks that open, close or pick from the menu go nowhere else
        let menu_busy = preset_dropdown.is_open() || preset_dropdown.captures(mouse_pos);
        if let Some(idx) = preset_dropdown.update(mouse_pos) {
            state = state.apply_preset(&mut engine, Preset::ALL[idx].name());
        }

        if !menu_busy {
            state = input::process_button_clicks(state, &mut engine, &buttons, mouse_pos);
            state = input::handle_slider(state, &slider, mouse_pos);
            state = input::handle_cell_click(state, &mut engine, mouse_pos);
        }
        state = input::process_keyboard_input(state, &mut engine);

        state = state.tick(get_frame_time(), &mut engine);

        clear_background(BLACK);
        rendering::draw_grid(engine.grid());
        rendering::draw_controls(&state, engine.grid(), &buttons, &slider, &preset_dropdown, mouse_pos);

        next_frame().await;
    }
}
