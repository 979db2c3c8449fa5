//! The 25-tile card and its mutations.

use crate::catalog::TermCatalog;
use crate::error::GridError;
use crate::position::{CELL_COUNT, GridPosition};
use crate::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// A full 5x5 card.
///
/// Tiles are stored in index order, so `tiles[i]` always sits at
/// `GridPosition::from_index(i)`. Every catalog term appears exactly once.
///
/// The grid is a plain data holder: toggling never runs line detection.
/// That is the job of [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub(crate) tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a freshly shuffled card using the thread-local RNG.
    #[instrument(skip(catalog))]
    pub fn new_game(catalog: &TermCatalog) -> Self {
        Self::shuffled_with(catalog, &mut rand::thread_rng())
    }

    /// Builds a card with terms permuted by the given RNG.
    ///
    /// Every permutation of the catalog is equally likely.
    #[instrument(skip(catalog, rng))]
    pub fn shuffled_with<R: Rng + ?Sized>(catalog: &TermCatalog, rng: &mut R) -> Self {
        let mut terms = catalog.all_terms().to_vec();
        terms.shuffle(rng);
        debug!("Shuffled {} terms onto a new card", terms.len());
        Self::from_terms(terms)
    }

    /// Builds a card with terms laid out in catalog order.
    #[instrument(skip(catalog))]
    pub fn in_catalog_order(catalog: &TermCatalog) -> Self {
        Self::from_terms(catalog.all_terms().to_vec())
    }

    fn from_terms(terms: Vec<String>) -> Self {
        let tiles = terms
            .into_iter()
            .zip(GridPosition::ALL)
            .map(|(term, position)| Tile::new(term, position))
            .collect();
        Self { tiles }
    }

    /// All tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at the given linear index (0-24).
    pub fn tile_at(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile at the given position.
    pub fn tile_at_position(&self, position: GridPosition) -> Option<&Tile> {
        self.tiles.get(position.to_index())
    }

    /// Flips selection on the tile at `index`, returning its new state.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` if `index >= 25`. The grid is
    /// left untouched.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, index: usize) -> Result<bool, GridError> {
        let tile = self.tiles.get_mut(index).ok_or_else(|| {
            warn!(index, "Rejected toggle outside the grid");
            GridError::IndexOutOfRange(index)
        })?;
        let selected = tile.toggle();
        debug!(index, selected, term = %tile.term, "Toggled tile");
        Ok(selected)
    }

    /// Flips selection on the tile at `position`.
    #[instrument(skip(self))]
    pub fn toggle_position(&mut self, position: GridPosition) -> Result<bool, GridError> {
        self.toggle(position.to_index())
    }

    /// Flips selection on the tile at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::CellOutOfRange` if either coordinate is outside `0..5`.
    #[instrument(skip(self))]
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> Result<bool, GridError> {
        let position = GridPosition::new(row, column)
            .ok_or(GridError::CellOutOfRange { row, column })?;
        self.toggle_position(position)
    }

    /// Clears every selection without reshuffling terms.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.tiles.iter_mut().for_each(Tile::clear);
        debug!("Cleared all selections");
    }

    /// Positions of all selected tiles.
    pub fn selected_positions(&self) -> HashSet<GridPosition> {
        self.tiles
            .iter()
            .filter(|tile| tile.selected)
            .map(|tile| tile.position)
            .collect()
    }

    /// Number of selected tiles.
    pub fn selected_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.selected).count()
    }

    /// True when all 25 tiles are selected.
    pub fn is_complete(&self) -> bool {
        self.selected_count() == CELL_COUNT
    }

    /// Position of the tile carrying `term`, if any.
    pub fn position_of(&self, term: &str) -> Option<GridPosition> {
        self.tiles
            .iter()
            .find(|tile| tile.term == term)
            .map(|tile| tile.position)
    }

    /// Formats the card as a human-readable table, marking selected tiles.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in self.tiles.chunks(crate::GRID_SIZE) {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| {
                    let mark = if tile.selected { 'X' } else { ' ' };
                    format!("[{}] {}", mark, tile.term)
                })
                .collect();
            result.push_str(&cells.join(" | "));
            result.push('\n');
        }
        result
    }
}
