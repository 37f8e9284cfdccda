use std::ops::RangeInclusive;

/// Startup settings for the window and the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Number of grid columns.
    pub grid_width: usize,
    /// Number of grid rows.
    pub grid_height: usize,
    pub window_width: i32,
    pub window_height: i32,
    /// Generations per second when playback starts.
    pub initial_speed: f32,
    /// Range the speed slider and keyboard can move within.
    pub speed_range: RangeInclusive<f32>,
    /// Preset stamped before the first frame, if any.
    pub initial_preset: Option<&'static str>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            window_width: 1000,
            window_height: 800,
            initial_speed: 3.0,
            speed_range: 1.0..=30.0,
            initial_preset: None,
        }
    }
}

impl AppConfig {
    /// Clamp a requested speed into the configured range
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(*self.speed_range.start(), *self.speed_range.end())
    }
}
