//! Candidate lines on the card.

use crate::position::{GRID_SIZE, GridPosition};
use serde::Serialize;
use std::collections::HashSet;

/// Which line a winning pattern covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LineKind {
    /// A full row (0-4).
    Row(usize),
    /// A full column (0-4).
    Column(usize),
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
}

impl LineKind {
    /// The 12 lines of a 5x5 card in detection order: rows, columns,
    /// main diagonal, anti-diagonal.
    pub const ALL: [LineKind; 12] = [
        LineKind::Row(0),
        LineKind::Row(1),
        LineKind::Row(2),
        LineKind::Row(3),
        LineKind::Row(4),
        LineKind::Column(0),
        LineKind::Column(1),
        LineKind::Column(2),
        LineKind::Column(3),
        LineKind::Column(4),
        LineKind::DiagonalMain,
        LineKind::DiagonalAnti,
    ];

    /// The five cells of this line, or `None` for a row/column index past 4.
    pub fn cells(self) -> Option<[GridPosition; GRID_SIZE]> {
        let mut cells = [GridPosition::ORIGIN; GRID_SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (row, column) = match self {
                LineKind::Row(row) => (row, i),
                LineKind::Column(column) => (i, column),
                LineKind::DiagonalMain => (i, i),
                LineKind::DiagonalAnti => (i, GRID_SIZE - 1 - i),
            };
            *cell = GridPosition::new(row, column)?;
        }
        Some(cells)
    }

    /// Player-facing name, counting rows and columns from 1.
    pub fn display_name(self) -> String {
        match self {
            LineKind::Row(row) => format!("row {}", row + 1),
            LineKind::Column(column) => format!("column {}", column + 1),
            LineKind::DiagonalMain => "diagonal \\".to_string(),
            LineKind::DiagonalAnti => "diagonal /".to_string(),
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A completed line: its kind plus its five cells in order.
///
/// Lines are recomputed on every detection pass and carry no identity
/// beyond their kind. Two lines are equal exactly when their kinds are.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: [GridPosition; GRID_SIZE],
}

impl WinningLine {
    /// Builds the line for `kind`, or `None` if the kind is off the card.
    pub fn new(kind: LineKind) -> Option<Self> {
        kind.cells().map(|cells| Self { kind, cells })
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The five cells, ordered by row (or by column for a row line).
    pub fn cells(&self) -> &[GridPosition; GRID_SIZE] {
        &self.cells
    }

    /// Checks whether the line passes through `position`.
    pub fn contains(&self, position: GridPosition) -> bool {
        self.cells.contains(&position)
    }

    /// True iff every cell of the line is selected.
    pub fn is_covered_by(&self, selected: &HashSet<GridPosition>) -> bool {
        self.cells.iter().all(|cell| selected.contains(cell))
    }
}

impl PartialEq for WinningLine {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for WinningLine {}

impl std::hash::Hash for WinningLine {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", self.kind, cells.join(", "))
    }
}
