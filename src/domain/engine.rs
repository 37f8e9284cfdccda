//! The simulation engine: one bounded grid plus the operations allowed on it.
//!
//! The engine knows nothing about time, input or drawing. A driver calls
//! [`Engine::advance`] on its own schedule and forwards user edits through
//! [`Engine::toggle_cell`] and [`Engine::apply_preset`].

use rand::Rng;
use tracing::{debug, trace, warn};

use super::{Cell, EngineError, Grid, Preset};

/// Owns the live grid and a scratch buffer of the same size.
///
/// `advance` fills the scratch buffer from the live grid, then swaps the two,
/// so readers only ever see a finished generation.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    scratch: Grid,
}

impl Engine {
    /// Allocate an all-dead grid of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        debug!(width, height, "engine created");
        Ok(Self {
            grid: Grid::new(width, height),
            scratch: Grid::new(width, height),
        })
    }

    /// (width, height) as passed to [`Engine::new`]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Live Moore neighbors of (`row`, `col`); off-grid positions are not counted.
    /// Returns 0 for a coordinate that is itself off the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        if !self.grid.contains(row, col) {
            return 0;
        }
        self.grid.count_live_neighbors(row, col)
    }

    /// Step one generation under B3/S23
    pub fn advance(&mut self) {
        self.grid.evolve_into(&mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        trace!(population = self.grid.population(), "advanced one generation");
    }

    /// Flip one cell and return its new state.
    ///
    /// Fails with [`EngineError::OutOfBounds`] without touching the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let Some(current) = self.grid.get(row, col) else {
            let (width, height) = self.dimensions();
            warn!(row, col, width, height, "toggle outside grid");
            return Err(EngineError::OutOfBounds { row, col, width, height });
        };
        let next = current.toggle();
        self.grid.set(row, col, next);
        Ok(next)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Clear the grid, then stamp the named preset centered on it.
    ///
    /// `"random"` fills every cell with a coin flip from the thread RNG.
    /// An unknown name leaves the grid cleared and returns
    /// [`EngineError::UnknownPreset`].
    pub fn apply_preset(&mut self, name: &str) -> Result<Preset, EngineError> {
        self.apply_preset_with_rng(name, &mut rand::rng())
    }

    /// Same as [`Engine::apply_preset`] with a caller-supplied RNG for the random fill
    pub fn apply_preset_with_rng<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<Preset, EngineError> {
        self.clear();

        let preset = name.parse::<Preset>().inspect_err(|_| {
            warn!(name, "unknown preset, grid left empty");
        })?;

        match preset.pattern() {
            Some(pattern) => pattern.place_centered(&mut self.grid),
            None => self.randomize(rng),
        }
        debug!(%preset, population = self.grid.population(), "preset applied");
        Ok(preset)
    }

    /// Every cell independently alive with probability 1/2
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.cells_mut().iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) { Cell::Alive } else { Cell::Dead };
        });
    }
}
