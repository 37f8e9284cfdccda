use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 9.0;

/// Horizontal slider mapping a track position to a 0.0..=1.0 fraction.
///
/// The slider itself is stateless; drag state lives in `DriverState`.
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
        }
    }

    /// Fraction under a mouse x coordinate, clamped to the track
    pub fn fraction_at(&self, mouse_x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((mouse_x - self.x) / self.width).clamp(0.0, 1.0)
    }

    fn knob_x(&self, fraction: f32) -> f32 {
        self.x + fraction.clamp(0.0, 1.0) * self.width
    }

    /// True over the track or the knob's vertical reach
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    pub fn draw(&self, fraction: f32, value_text: &str, mouse_pos: (f32, f32)) {
        draw_text(&format!("{}: {}", self.label, value_text), self.x, self.y - 16.0, 18.0, BLACK);
        draw_rectangle(self.x, self.y - TRACK_HEIGHT / 2.0, self.width, TRACK_HEIGHT, Color::from_rgba(100, 100, 100, 255));

        let knob_color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(220, 220, 220, 255)
        } else {
            Color::from_rgba(200, 200, 200, 255)
        };
        let kx = self.knob_x(fraction);
        draw_circle(kx, self.y, KNOB_RADIUS, knob_color);
        draw_circle_lines(kx, self.y, KNOB_RADIUS, 2.0, Color::from_rgba(100, 100, 100, 255));
    }
}
