use macroquad::prelude::*;

use crate::application::DriverState;
use crate::domain::Grid;
use crate::ui::{self, Button, Dropdown, Slider, PANEL_MARGIN, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(178.0 / 255.0, 34.0 / 255.0, 34.0 / 255.0, 1.0);
const DEAD_COLOR: Color = Color::new(107.0 / 255.0, 142.0 / 255.0, 35.0 / 255.0, 1.0);
const PANEL_COLOR: Color = Color::new(150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0, 1.0);

/// Draw every cell of the current generation, filling alive cells
pub fn draw_grid(grid: &Grid) {
    let (width, height) = grid.dimensions();
    let cell_size = ui::cell_size(width, height);
    let outline = cell_size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;
        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, ALIVE_COLOR);
        } else if outline {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, DEAD_COLOR);
        } else {
            draw_rectangle(x, y, cell_size, cell_size, DEAD_COLOR);
        }
    }
}

fn draw_panel_background() {
    draw_rectangle(ui::panel_x(), 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);
}

/// Draw the side panel: buttons, speed slider, readouts, preset menu
pub fn draw_controls(
    state: &DriverState,
    grid: &Grid,
    buttons: &[Button],
    slider: &Slider,
    presets: &Dropdown,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    let px = ui::panel_x() + PANEL_MARGIN;
    draw_text("Game of Life", px, 30.0, 26.0, BLACK);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    slider.draw(
        state.speed_fraction(),
        &format!("{:.0} gen/s", state.updates_per_second),
        mouse_pos,
    );

    let (gw, gh) = grid.dimensions();
    let status = if state.is_running { "Running" } else { "Paused" };
    let preset = state.last_preset.map_or("-", |p| p.name());
    let preset_info = state.last_preset.map_or("", |p| p.description());
    let readouts = [
        format!("Status: {status}"),
        format!("Generation: {}", state.generation),
        format!("Population: {}", grid.population()),
        format!("Grid: {gw}x{gh}"),
        format!("Preset: {preset}"),
        preset_info.to_owned(),
    ];
    for (i, line) in readouts.iter().enumerate() {
        draw_text(line, px, 330.0 + i as f32 * 22.0, 20.0, BLACK);
    }

    let help = [
        "LMB: toggle cell",
        "Space: play/pause",
        "N: step  C: clear",
        "R: random",
        "Up/Down: speed",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px, 650.0 + i as f32 * 18.0, 16.0, Color::from_rgba(40, 40, 40, 255));
    }

    // Menu last so an open list draws over the readouts
    presets.draw(mouse_pos);
}
