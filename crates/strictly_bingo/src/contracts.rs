//! Contract-based validation for tile toggles.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::GridError;
use crate::invariants::{BingoInvariants, InvariantSet};
use crate::position::CELL_COUNT;
use crate::session::{GameSession, describe_violations};
use serde::Serialize;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GridError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GridError>;
}

// ─────────────────────────────────────────────────────────────
//  Toggle Action
// ─────────────────────────────────────────────────────────────

/// The player marking or unmarking the tile at a linear index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Toggle {
    /// Linear tile index (0-24).
    pub index: usize,
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the toggle must address a tile on the card.
pub struct IndexInRange;

impl IndexInRange {
    /// Rejects indices outside `0..25`.
    #[instrument]
    pub fn check(action: &Toggle) -> Result<(), GridError> {
        if action.index < CELL_COUNT {
            Ok(())
        } else {
            warn!(index = action.index, "Toggle index out of range");
            Err(GridError::IndexOutOfRange(action.index))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Toggle Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for toggle actions.
///
/// Preconditions:
/// - Index addresses a tile
///
/// Postconditions:
/// - Grid, term and line invariants hold
/// - Exactly one tile changed its selection
/// - No tile changed its term or position
pub struct ToggleContract;

impl Contract<GameSession, Toggle> for ToggleContract {
    fn pre(_session: &GameSession, action: &Toggle) -> Result<(), GridError> {
        IndexInRange::check(action)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), GridError> {
        BingoInvariants::check_all(after).map_err(|violations| {
            GridError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe_violations(&violations)
            ))
        })?;

        let pairs = before.tiles().iter().zip(after.tiles());

        if pairs
            .clone()
            .any(|(b, a)| b.term() != a.term() || b.position() != a.position())
        {
            return Err(GridError::InvariantViolation(
                "Toggle moved a term or position".to_string(),
            ));
        }

        let changed = pairs
            .filter(|(b, a)| b.is_selected() != a.is_selected())
            .count();
        if changed != 1 {
            return Err(GridError::InvariantViolation(format!(
                "Toggle changed {} tiles, expected 1",
                changed
            )));
        }

        Ok(())
    }
}
