use std::fmt;
use std::str::FromStr;

use super::{Cell, EngineError, Grid};

/// A fixed cell template that can be stamped onto the grid.
///
/// `rows` holds the template top to bottom, one byte per cell (0 dead, 1 alive).
/// `offset_x`/`offset_y` move the template's top-left corner away from the
/// grid center so the shape sits roughly centered.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub description: &'static str,
    pub offset_x: usize,
    pub offset_y: usize,
    pub rows: &'static [&'static [u8]],
}

impl Pattern {
    /// Template width in cells
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Template height in cells
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of live cells in the template
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&bit| bit != 0)
            .count()
    }

    /// Stamp the template with its top-left corner at (`row`, `col`).
    ///
    /// Template cells overwrite the grid; cells landing off the board are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: isize, col: isize) {
        for (dr, bits) in self.rows.iter().enumerate() {
            for (dc, &bit) in bits.iter().enumerate() {
                let (Some(r), Some(c)) = (
                    row.checked_add_unsigned(dr).and_then(|r| usize::try_from(r).ok()),
                    col.checked_add_unsigned(dc).and_then(|c| usize::try_from(c).ok()),
                ) else {
                    continue;
                };
                grid.set(r, c, Cell::from_bit(bit));
            }
        }
    }

    /// Stamp the template centered on the grid using its declared offsets
    pub fn place_centered(&self, grid: &mut Grid) {
        let (width, height) = grid.dimensions();
        let row = (height / 2) as isize - self.offset_y as isize;
        let col = (width / 2) as isize - self.offset_x as isize;
        self.place_on(grid, row, col);
    }
}

/// Named entries of the preset menu.
///
/// Every variant except [`Preset::Random`] maps to a fixed [`Pattern`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Glider,
    Blinker,
    Block,
    Beehive,
    Pulsar,
    Random,
    RPentomino,
    Diehard,
    Acorn,
}

impl Preset {
    /// All presets in menu order
    pub const ALL: [Preset; 9] = [
        Preset::Glider,
        Preset::Blinker,
        Preset::Block,
        Preset::Beehive,
        Preset::Pulsar,
        Preset::Random,
        Preset::RPentomino,
        Preset::Diehard,
        Preset::Acorn,
    ];

    /// Identifier accepted by `Engine::apply_preset`
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Glider => "glider",
            Preset::Blinker => "blinker",
            Preset::Block => "block",
            Preset::Beehive => "beehive",
            Preset::Pulsar => "pulsar",
            Preset::Random => "random",
            Preset::RPentomino => "rpentomino",
            Preset::Diehard => "diehard",
            Preset::Acorn => "acorn",
        }
    }

    /// One-line summary for the panel
    pub const fn description(self) -> &'static str {
        match self.pattern() {
            Some(pattern) => pattern.description,
            None => "Coin flip per cell",
        }
    }

    /// The fixed template, or `None` for the random fill
    pub const fn pattern(self) -> Option<&'static Pattern> {
        match self {
            Preset::Glider => Some(&catalog::GLIDER),
            Preset::Blinker => Some(&catalog::BLINKER),
            Preset::Block => Some(&catalog::BLOCK),
            Preset::Beehive => Some(&catalog::BEEHIVE),
            Preset::Pulsar => Some(&catalog::PULSAR),
            Preset::Random => None,
            Preset::RPentomino => Some(&catalog::R_PENTOMINO),
            Preset::Diehard => Some(&catalog::DIEHARD),
            Preset::Acorn => Some(&catalog::ACORN),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| EngineError::UnknownPreset(s.to_owned()))
    }
}

/// Classic Game of Life shapes
pub mod catalog {
    use super::Pattern;

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        description: "Moves diagonally (period 4)",
        offset_x: 1,
        offset_y: 1,
        rows: &[
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, 1, 1],
        ],
    };

    /// Blinker - period 2 oscillator, starts vertical
    pub const BLINKER: Pattern = Pattern {
        description: "Oscillator (period 2)",
        offset_x: 0,
        offset_y: 1,
        rows: &[
            &[1],
            &[1],
            &[1],
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        description: "Still life",
        offset_x: 1,
        offset_y: 1,
        rows: &[
            &[1, 1],
            &[1, 1],
        ],
    };

    pub const BEEHIVE: Pattern = Pattern {
        description: "Still life",
        offset_x: 2,
        offset_y: 1,
        rows: &[
            &[0, 1, 1, 0],
            &[1, 0, 0, 1],
            &[0, 1, 1, 0],
        ],
    };

    /// Pulsar - period 3 oscillator
    pub const PULSAR: Pattern = Pattern {
        description: "Oscillator (period 3)",
        offset_x: 6,
        offset_y: 6,
        rows: &[
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        ],
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Pattern = Pattern {
        description: "Methuselah - stabilizes at gen 1103",
        offset_x: 1,
        offset_y: 1,
        rows: &[
            &[0, 1, 1],
            &[1, 1, 0],
            &[0, 1, 0],
        ],
    };

    /// Diehard - vanishes after 130 generations
    pub const DIEHARD: Pattern = Pattern {
        description: "Methuselah - dies out at gen 130",
        offset_x: 4,
        offset_y: 1,
        rows: &[
            &[0, 0, 0, 0, 0, 0, 1, 0],
            &[1, 1, 0, 0, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0, 1, 1, 1],
        ],
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern {
        description: "Methuselah - stabilizes at gen 5206",
        offset_x: 3,
        offset_y: 1,
        rows: &[
            &[0, 1, 0, 0, 0, 0, 0],
            &[0, 0, 0, 1, 0, 0, 0],
            &[1, 1, 0, 0, 1, 1, 1],
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        let expected = [
            (Preset::Glider, 3, 3, 5),
            (Preset::Blinker, 3, 1, 3),
            (Preset::Block, 2, 2, 4),
            (Preset::Beehive, 3, 4, 6),
            (Preset::Pulsar, 13, 13, 48),
            (Preset::RPentomino, 3, 3, 5),
            (Preset::Diehard, 3, 8, 7),
            (Preset::Acorn, 3, 7, 7),
        ];
        for (preset, height, width, population) in expected {
            let pattern = preset.pattern().unwrap();
            assert_eq!(pattern.height(), height, "{preset} height");
            assert_eq!(pattern.width(), width, "{preset} width");
            assert_eq!(pattern.population(), population, "{preset} population");
            assert!(pattern.rows.iter().all(|row| row.len() == width), "{preset} is ragged");
        }
    }

    #[test]
    fn test_pulsar_is_symmetric() {
        let rows = catalog::PULSAR.rows;
        for r in 0..13 {
            for c in 0..13 {
                assert_eq!(rows[r][c], rows[c][r]);
                assert_eq!(rows[r][c], rows[12 - r][c]);
                assert_eq!(rows[r][c], rows[r][12 - c]);
            }
        }
    }

    #[test]
    fn test_every_preset_has_description() {
        for preset in Preset::ALL {
            assert!(!preset.description().is_empty(), "{preset}");
        }
        assert_eq!(Preset::Block.description(), "Still life");
        assert_eq!(Preset::Pulsar.description(), "Oscillator (period 3)");
    }

    #[test]
    fn test_random_has_no_template() {
        assert!(Preset::Random.pattern().is_none());
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Preset::ALL.len(), 9);
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert!(matches!(
            "Glider".parse::<Preset>(),
            Err(EngineError::UnknownPreset(name)) if name == "Glider"
        ));
    }

    #[test]
    fn test_place_on_clips_at_edges() {
        let mut grid = Grid::new(4, 4);
        catalog::BLOCK.place_on(&mut grid, -1, 3);
        // Only (0, 3) is on the board
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.get(0, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_place_on_overwrites_with_dead_bits() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 1, Cell::Alive);
        // Glider's (0, 0) bit is dead and covers (1, 1)
        catalog::GLIDER.place_on(&mut grid, 1, 1);
        assert_eq!(grid.get(1, 1), Some(Cell::Dead));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_place_centered_uses_offsets() {
        let mut grid = Grid::new(10, 10);
        catalog::BLOCK.place_centered(&mut grid);
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            assert_eq!(grid.get(r, c), Some(Cell::Alive));
        }
        assert_eq!(grid.population(), 4);
    }
}
