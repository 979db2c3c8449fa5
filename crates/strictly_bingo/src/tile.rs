//! A single cell on the card.

use crate::position::GridPosition;
use serde::Serialize;

/// One grid cell: a term bound to a position, plus a selection flag.
///
/// Term and position are fixed when the card is built. Only the
/// selection flag changes during play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Tile {
    pub(crate) term: String,
    pub(crate) position: GridPosition,
    #[new(default)]
    pub(crate) selected: bool,
}

impl Tile {
    /// The term printed on this tile.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Where this tile sits on the card.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Whether the player has marked this tile.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Flips the selection flag, returning the new state.
    pub(crate) fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Clears the selection flag.
    pub(crate) fn clear(&mut self) {
        self.selected = false;
    }
}
