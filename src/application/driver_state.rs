use tracing::{debug, info, warn};

use super::AppConfig;
use crate::domain::{Engine, Preset};

/// DriverState holds everything the window loop tracks besides the grid:
/// playback flag, speed, generation counter and frame pacing.
///
/// It never owns the engine; every call that changes the board borrows it.
#[derive(Debug, Clone)]
pub struct DriverState {
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// True while the speed slider knob is held down
    pub slider_dragging: bool,
    /// Last preset applied, for the panel readout
    pub last_preset: Option<Preset>,
}

impl DriverState {
    /// Paused driver at the configured starting speed
    pub fn new(config: &AppConfig) -> Self {
        Self {
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: config.clamp_speed(config.initial_speed),
            min_speed: *config.speed_range.start(),
            max_speed: *config.speed_range.end(),
            slider_dragging: false,
            last_preset: None,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        debug!(running = self.is_running, "playback toggled");
        self
    }

    /// Advance exactly one generation regardless of pause state
    pub fn step(mut self, engine: &mut Engine) -> Self {
        engine.advance();
        self.generation += 1;
        self
    }

    /// Clear the board, pause and reset the counter
    pub fn clear(mut self, engine: &mut Engine) -> Self {
        engine.clear();
        self.last_preset = None;
        self.reset()
    }

    /// Apply a named preset, pause and reset the counter.
    /// Unknown names still leave the board cleared.
    pub fn apply_preset(mut self, engine: &mut Engine, name: &str) -> Self {
        match engine.apply_preset(name) {
            Ok(preset) => {
                info!(%preset, population = engine.population(), "preset loaded");
                self.last_preset = Some(preset);
            }
            Err(err) => {
                warn!(%err, "preset not applied");
                self.last_preset = None;
            }
        }
        self.reset()
    }

    /// Toggle the cell under a click; off-grid clicks are logged and ignored
    pub fn toggle_cell(self, engine: &mut Engine, row: usize, col: usize) -> Self {
        if let Err(err) = engine.toggle_cell(row, col) {
            warn!(%err, "click ignored");
        }
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(self, delta: f32) -> Self {
        let speed = self.updates_per_second + delta;
        self.with_speed(speed)
    }

    /// Set simulation speed, clamped to the allowed range
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.updates_per_second = speed.clamp(self.min_speed, self.max_speed);
        self
    }

    /// Where the current speed sits in the allowed range, 0.0 to 1.0
    pub fn speed_fraction(&self) -> f32 {
        let span = self.max_speed - self.min_speed;
        if span <= 0.0 {
            return 0.0;
        }
        (self.updates_per_second - self.min_speed) / span
    }

    /// Set speed from a 0.0 to 1.0 slider position
    pub fn with_speed_fraction(self, fraction: f32) -> Self {
        let speed = self.min_speed + fraction.clamp(0.0, 1.0) * (self.max_speed - self.min_speed);
        self.with_speed(speed)
    }

    /// Update simulation by one frame.
    /// Advances one generation once enough frame time has accumulated.
    pub fn tick(mut self, delta_time: f32, engine: &mut Engine) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            engine.advance();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }

    fn reset(mut self) -> Self {
        self.generation = 0;
        self.update_timer = 0.0;
        self.is_running = false;
        self
    }
}
