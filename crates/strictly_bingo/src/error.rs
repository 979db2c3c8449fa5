//! Error types for the bingo engine.

/// Error that can occur when validating a term catalog.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CatalogError {
    /// The catalog does not hold exactly one term per cell.
    #[display("Catalog must contain exactly {} terms, found {}", expected, found)]
    WrongCount {
        /// Number of terms a card needs.
        expected: usize,
        /// Number of terms supplied.
        found: usize,
    },

    /// The same term appears more than once.
    #[display("Duplicate term in catalog: {:?}", _0)]
    DuplicateTerm(String),

    /// A term is empty or whitespace-only.
    #[display("Blank term at catalog index {}", _0)]
    BlankTerm(usize),
}

impl std::error::Error for CatalogError {}

/// Error that can occur when addressing or mutating a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Linear index outside `0..25`.
    #[display("Tile index {} is out of range (must be 0-24)", _0)]
    IndexOutOfRange(usize),

    /// Row or column outside `0..5`.
    #[display("Cell ({}, {}) is outside the 5x5 grid", row, column)]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GridError {}
