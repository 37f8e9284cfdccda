mod button;
mod dropdown;
mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use slider::Slider;

// UI constants - functions below handle the responsive parts
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 200.0;
pub const PANEL_MARGIN: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Button indices as laid out by [`create_buttons`]
pub const PLAY_BUTTON: usize = 0;
pub const STEP_BUTTON: usize = 1;
pub const CLEAR_BUTTON: usize = 2;
pub const RANDOM_BUTTON: usize = 3;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Largest square cell size that fits the whole grid in the grid area
pub fn cell_size(grid_width: usize, grid_height: usize) -> f32 {
    fit_cell_size(grid_area_width(), grid_area_height(), grid_width, grid_height)
}

fn fit_cell_size(area_width: f32, area_height: f32, grid_width: usize, grid_height: usize) -> f32 {
    let by_width = area_width / grid_width.max(1) as f32;
    let by_height = area_height / grid_height.max(1) as f32;
    by_width.min(by_height).max(1.0)
}

/// Map a screen position to (row, col); `None` outside the grid
pub fn screen_to_cell(
    mouse_pos: (f32, f32),
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
) -> Option<(usize, usize)> {
    let (x, y) = mouse_pos;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / cell_size) as usize;
    let row = (y / cell_size) as usize;
    (row < grid_height && col < grid_width).then_some((row, col))
}

/// Create panel buttons with standard layout
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x() + PANEL_MARGIN;
    let width = PANEL_WIDTH - 2.0 * PANEL_MARGIN;
    let play_label = if is_running { "Pause" } else { "Play" };
    vec![
        Button::new(px, 50.0, width, BUTTON_HEIGHT, play_label),
        Button::new(px, 100.0, width, BUTTON_HEIGHT, "Step"),
        Button::new(px, 150.0, width, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 200.0, width, BUTTON_HEIGHT, "Random"),
    ]
}

/// Speed slider positioned under the buttons
pub fn create_speed_slider() -> Slider {
    Slider::new(panel_x() + PANEL_MARGIN, 280.0, PANEL_WIDTH - 2.0 * PANEL_MARGIN, "Speed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_size_uses_tighter_axis() {
        assert_eq!(fit_cell_size(800.0, 800.0, 100, 100), 8.0);
        assert_eq!(fit_cell_size(800.0, 400.0, 100, 100), 4.0);
        assert_eq!(fit_cell_size(10.0, 10.0, 100, 100), 1.0);
    }

    #[test]
    fn test_screen_to_cell() {
        assert_eq!(screen_to_cell((0.0, 0.0), 8.0, 100, 100), Some((0, 0)));
        // x selects the column, y the row
        assert_eq!(screen_to_cell((17.0, 9.0), 8.0, 100, 100), Some((1, 2)));
        assert_eq!(screen_to_cell((800.0, 0.0), 8.0, 100, 100), None);
        assert_eq!(screen_to_cell((-1.0, 5.0), 8.0, 100, 100), None);
    }
}
