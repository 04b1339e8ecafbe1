//! Binary cell state.

/// State of a single grid cell.
///
/// Stored in grids as its `u8` discriminant so that neighbour counts are a
/// plain sum over raw bytes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// Value `0`.
    #[default]
    Dead = 0,
    /// Value `1`.
    Alive = 1,
}

impl Cell {
    /// Decode a raw cell value. Returns `None` for anything other than 0 or 1.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            _ => None,
        }
    }

    /// Raw value of this cell (0 or 1).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether the cell is alive.
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}
