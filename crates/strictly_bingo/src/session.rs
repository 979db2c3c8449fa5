//! The live game: a card plus its cached win state.

use crate::catalog::TermCatalog;
use crate::contracts::{Contract, Toggle, ToggleContract};
use crate::error::GridError;
use crate::grid::Grid;
use crate::invariants::{BingoInvariants, InvariantSet, InvariantViolation};
use crate::position::{CELL_COUNT, GridPosition};
use crate::rules::{self, LineKind, WinningLine};
use crate::tile::Tile;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Whether the card currently shows at least one complete line.
///
/// `Won` is not terminal: unmarking a tile can drop back to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum SessionPhase {
    /// No complete line yet.
    Playing,
    /// One or more complete lines.
    Won,
}

/// What changed after a successful toggle.
///
/// The presentation layer uses this to re-render and to fire a
/// celebration exactly once per new win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    position: GridPosition,
    selected: bool,
    completed: Vec<WinningLine>,
    new_win: bool,
}

impl ToggleOutcome {
    /// The toggled position.
    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// The tile's selection state after the toggle.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Lines that became complete with this toggle.
    pub fn completed(&self) -> &[WinningLine] {
        &self.completed
    }

    /// True when the number of complete lines strictly increased.
    pub fn is_new_win(&self) -> bool {
        self.new_win
    }
}

/// A single player's game.
///
/// `won_lines` is a cache of [`rules::detect`] over the grid's selection.
/// It is recomputed after every mutation and never edited directly.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    #[serde(skip)]
    pub(crate) catalog: TermCatalog,
    pub(crate) grid: Grid,
    pub(crate) won_lines: Vec<WinningLine>,
}

impl GameSession {
    /// Starts a game on a freshly shuffled card from the built-in catalog.
    #[instrument]
    pub fn new() -> Self {
        Self::with_catalog(TermCatalog::builtin())
    }

    /// Starts a game on a freshly shuffled card from `catalog`.
    #[instrument(skip(catalog))]
    pub fn with_catalog(catalog: TermCatalog) -> Self {
        let grid = Grid::new_game(&catalog);
        info!("Starting new bingo session");
        Self::from_parts(catalog, grid)
    }

    /// Starts a game on a card shuffled by `rng`.
    #[instrument(skip(catalog, rng))]
    pub fn with_rng<R: Rng + ?Sized>(catalog: TermCatalog, rng: &mut R) -> Self {
        let grid = Grid::shuffled_with(&catalog, rng);
        Self::from_parts(catalog, grid)
    }

    /// Wraps an existing card, recomputing win state from its selection.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvariantViolation` if the card does not carry
    /// each catalog term exactly once at its own position.
    #[instrument(skip(catalog, grid))]
    pub fn from_grid(catalog: TermCatalog, grid: Grid) -> Result<Self, GridError> {
        let session = Self::from_parts(catalog, grid);
        BingoInvariants::check_all(&session).map_err(|violations| {
            warn!(
                count = violations.len(),
                "Rejected card that does not match its catalog"
            );
            GridError::InvariantViolation(describe_violations(&violations))
        })?;
        Ok(session)
    }

    pub(crate) fn from_parts(catalog: TermCatalog, grid: Grid) -> Self {
        let mut session = Self {
            catalog,
            grid,
            won_lines: Vec::new(),
        };
        session.refresh_lines();
        session
    }

    /// Flips the tile at `index` and re-runs line detection.
    ///
    /// # Errors
    ///
    /// Returns `GridError::IndexOutOfRange` for `index >= 25`; the session
    /// is unchanged.
    #[instrument(skip(self), fields(lines_before = self.won_lines.len()))]
    pub fn toggle_tile(&mut self, index: usize) -> Result<ToggleOutcome, GridError> {
        let action = Toggle::new(index);
        ToggleContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let selected = self.grid.toggle(index)?;
        let previous = std::mem::take(&mut self.won_lines);
        self.refresh_lines();

        let completed: Vec<WinningLine> = self
            .won_lines
            .iter()
            .filter(|line| !previous.contains(line))
            .copied()
            .collect();
        let new_win = self.won_lines.len() > previous.len();

        if new_win {
            let kinds: Vec<LineKind> = completed.iter().map(|line| line.kind()).collect();
            info!(?kinds, total = self.won_lines.len(), "Bingo!");
        } else {
            debug!(index, selected, total = self.won_lines.len(), "Tile toggled");
        }

        #[cfg(debug_assertions)]
        if let Err(e) = ToggleContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, rolling back toggle");
            *self = before;
            return Err(e);
        }

        Ok(ToggleOutcome {
            position: self.grid.tiles[index].position,
            selected,
            completed,
            new_win,
        })
    }

    /// Flips the tile at `position` and re-runs line detection.
    pub fn toggle_tile_at(&mut self, position: GridPosition) -> Result<ToggleOutcome, GridError> {
        self.toggle_tile(position.to_index())
    }

    /// Replaces the card with a freshly shuffled one and clears win state.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.new_game_with(&mut rand::thread_rng());
    }

    /// Replaces the card with one shuffled by `rng` and clears win state.
    #[instrument(skip(self, rng))]
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        info!("Dealing a new card");
        self.grid = Grid::shuffled_with(&self.catalog, rng);
        self.won_lines.clear();
    }

    /// Clears all selections on the current card without reshuffling.
    #[instrument(skip(self))]
    pub fn reset_current_game(&mut self) {
        info!("Resetting current card");
        self.grid.reset();
        self.won_lines.clear();
    }

    fn refresh_lines(&mut self) {
        self.won_lines = rules::detect(&self.grid.selected_positions());
    }

    /// The catalog cards are dealt from.
    pub fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }

    /// The current card.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    /// True when at least one line is complete.
    pub fn is_won(&self) -> bool {
        !self.won_lines.is_empty()
    }

    /// Complete lines in detection order.
    pub fn won_lines(&self) -> &[WinningLine] {
        &self.won_lines
    }

    /// Number of selected tiles.
    pub fn selected_count(&self) -> usize {
        self.grid.selected_count()
    }

    /// Current phase of the game.
    pub fn phase(&self) -> SessionPhase {
        if self.is_won() {
            SessionPhase::Won
        } else {
            SessionPhase::Playing
        }
    }

    /// Short status line for display.
    pub fn status_text(&self) -> String {
        match self.won_lines.len() {
            0 => format!("Selected: {}/{}", self.selected_count(), CELL_COUNT),
            1 => "BINGO!".to_string(),
            _ => "MULTIPLE BINGOS!".to_string(),
        }
    }
}

/// Joins violation descriptions into one message.
pub(crate) fn describe_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
