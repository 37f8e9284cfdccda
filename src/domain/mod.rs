mod cell;
mod engine;
mod error;
mod grid;
mod patterns;

pub use cell::Cell;
pub use engine::Engine;
pub use error::EngineError;
pub use grid::Grid;
pub use patterns::{Pattern, Preset, catalog};
