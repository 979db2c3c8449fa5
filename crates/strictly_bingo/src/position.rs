//! Grid positions on the 5x5 card.

use serde::Serialize;

/// Number of rows (and columns) on a card.
pub const GRID_SIZE: usize = 5;

/// Number of cells on a card.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell on the 5x5 card, addressed by row and column.
///
/// Positions are bijective with linear indices in row-major order:
/// `index = row * 5 + column`. A `GridPosition` can only be built from
/// in-range coordinates, so every value names a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    row: u8,
    column: u8,
}

impl GridPosition {
    /// Top-left cell.
    pub const ORIGIN: GridPosition = GridPosition { row: 0, column: 0 };

    /// Center cell (row 2, column 2).
    pub const CENTER: GridPosition = GridPosition { row: 2, column: 2 };

    /// All 25 positions in index order.
    pub const ALL: [GridPosition; CELL_COUNT] = {
        let mut all = [GridPosition::ORIGIN; CELL_COUNT];
        let mut index = 0;
        while index < CELL_COUNT {
            all[index] = GridPosition {
                row: (index / GRID_SIZE) as u8,
                column: (index % GRID_SIZE) as u8,
            };
            index += 1;
        }
        all
    };

    /// Creates a position from row and column, or `None` if either is out of range.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < GRID_SIZE && column < GRID_SIZE {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Creates a position from a linear index (0-24).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to linear index (0-24).
    pub fn to_index(self) -> usize {
        self.row() * GRID_SIZE + self.column()
    }

    /// Row of this position (0-4).
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column of this position (0-4).
    pub fn column(self) -> usize {
        usize::from(self.column)
    }

    /// Checks that row and column lie on the card.
    pub fn is_valid(self) -> bool {
        self.row() < GRID_SIZE && self.column() < GRID_SIZE
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}
