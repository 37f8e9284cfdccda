//! Conway's Game of Life on a fixed, edge-bounded grid with a macroquad
//! control panel.

// Domain layer - the simulation engine
pub mod domain;

// Application layer - playback state and settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Engine, EngineError, Grid, Pattern, Preset};
pub use application::{AppConfig, DriverState};
