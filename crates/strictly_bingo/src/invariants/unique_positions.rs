//! Position invariant: every cell holds exactly one tile.

use super::Invariant;
use crate::position::{CELL_COUNT, GridPosition};
use crate::session::GameSession;

/// Invariant: the card has 25 tiles and tile `i` sits at index `i`.
///
/// Index ordering implies that each position is occupied exactly once.
pub struct UniquePositionsInvariant;

impl Invariant<GameSession> for UniquePositionsInvariant {
    fn holds(session: &GameSession) -> bool {
        let tiles = session.tiles();
        tiles.len() == CELL_COUNT
            && tiles
                .iter()
                .zip(GridPosition::ALL)
                .all(|(tile, expected)| tile.position() == expected && expected.is_valid())
    }

    fn description() -> &'static str {
        "Every grid position is occupied by exactly one tile"
    }
}
