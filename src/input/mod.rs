use macroquad::prelude::*;

use crate::application::DriverState;
use crate::domain::Engine;
use crate::ui::{self, Button, Slider, CLEAR_BUTTON, PLAY_BUTTON, RANDOM_BUTTON, STEP_BUTTON};

/// Toggle the cell under a fresh left click in the grid area
pub fn handle_cell_click(state: DriverState, engine: &mut Engine, mouse_pos: (f32, f32)) -> DriverState {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= ui::grid_area_width() {
        return state;
    }

    let (width, height) = engine.dimensions();
    let cell_size = ui::cell_size(width, height);
    match ui::screen_to_cell(mouse_pos, cell_size, width, height) {
        Some((row, col)) => state.toggle_cell(engine, row, col),
        None => state,
    }
}

/// Press, drag and release on the speed slider
pub fn handle_slider(mut state: DriverState, slider: &Slider, mouse_pos: (f32, f32)) -> DriverState {
    if is_mouse_button_pressed(MouseButton::Left) && slider.is_hovered(mouse_pos) {
        state.slider_dragging = true;
    }
    if !is_mouse_button_down(MouseButton::Left) {
        state.slider_dragging = false;
    }
    if state.slider_dragging {
        let fraction = slider.fraction_at(mouse_pos.0);
        return state.with_speed_fraction(fraction);
    }
    state
}

/// Keyboard shortcuts
pub fn process_keyboard_input(state: DriverState, engine: &mut Engine) -> DriverState {
    let mut state = state;
    if is_key_pressed(KeyCode::Space) {
        state = state.toggle_running();
    }
    if is_key_pressed(KeyCode::N) {
        state = state.step(engine);
    }
    if is_key_pressed(KeyCode::C) {
        state = state.clear(engine);
    }
    if is_key_pressed(KeyCode::R) {
        state = state.apply_preset(engine, "random");
    }
    if is_key_pressed(KeyCode::Up) {
        state = state.adjust_speed(1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        state = state.adjust_speed(-1.0);
    }
    state
}

/// Dispatch panel button clicks
pub fn process_button_clicks(
    state: DriverState,
    engine: &mut Engine,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> DriverState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                PLAY_BUTTON => s.toggle_running(),
                STEP_BUTTON => s.step(engine),
                CLEAR_BUTTON => s.clear(engine),
                RANDOM_BUTTON => s.apply_preset(engine, "random"),
                _ => s,
            }
        })
}
