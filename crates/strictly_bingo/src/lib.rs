//! Strictly Bingo - type-safe 5x5 bingo card engine
//!
//! This library builds shuffled bingo cards from a fixed catalog of terms,
//! tracks which tiles the player has marked, and detects completed lines.
//!
//! # Architecture
//!
//! - **Catalog**: the validated set of 25 terms a card is built from
//! - **Grid**: 25 tiles, one per position, each carrying one term
//! - **Rules**: pure line detection over a set of selected positions
//! - **Session**: the live game, re-running detection after every toggle
//!
//! # Example
//!
//! ```
//! use strictly_bingo::{GameSession, GridPosition, LineKind};
//!
//! # fn example() -> Result<(), strictly_bingo::GridError> {
//! let mut session = GameSession::new();
//!
//! for column in 0..5 {
//!     let position = GridPosition::new(0, column).expect("column in range");
//!     session.toggle_tile_at(position)?;
//! }
//!
//! assert!(session.is_won());
//! assert_eq!(session.won_lines()[0].kind(), LineKind::Row(0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod contracts;
mod error;
mod grid;
mod invariants;
mod position;
mod rules;
mod session;
mod tile;

// Crate-level exports - Catalog
pub use catalog::TermCatalog;

// Crate-level exports - Grid model
pub use grid::Grid;
pub use position::{CELL_COUNT, GRID_SIZE, GridPosition};
pub use tile::Tile;

// Crate-level exports - Errors
pub use error::{CatalogError, GridError};

// Crate-level exports - Line detection
pub use rules::{
    LineKind, WinningLine, count_lines, describe, detect, has_any_line, has_line,
};

// Crate-level exports - Session
pub use session::{GameSession, SessionPhase, ToggleOutcome};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, IndexInRange, Toggle, ToggleContract};
pub use invariants::{
    BingoInvariants, Invariant, InvariantSet, InvariantViolation, UniquePositionsInvariant,
    UniqueTermsInvariant, WonLinesInvariant,
};
