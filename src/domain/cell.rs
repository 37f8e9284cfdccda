/// Cell is the state of one square on the board.
/// Each cell is either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip Alive <-> Dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Build a cell from a template bit (0 = dead, anything else = alive)
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_cell_survives_only_on_two_or_three() {
        for neighbors in 0..=8u8 {
            let expected = if matches!(neighbors, 2 | 3) { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Alive.evolve(neighbors), expected, "{neighbors} neighbors");
        }
    }

    #[test]
    fn test_dead_cell_born_only_on_three() {
        for neighbors in 0..=8u8 {
            let expected = if neighbors == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.evolve(neighbors), expected, "{neighbors} neighbors");
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(Cell::from_bit(0), Cell::Dead);
        assert_eq!(Cell::from_bit(1), Cell::Alive);
    }
}
