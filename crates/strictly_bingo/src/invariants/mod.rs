//! First-class invariants for a bingo session.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_each<S>(
    checks: &[(fn(&S) -> bool, &'static str)],
    state: &S,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        check_each::<S>(
            &[
                (I1::holds, I1::description()),
                (I2::holds, I2::description()),
                (I3::holds, I3::description()),
            ],
            state,
        )
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        check_each::<S>(
            &[(I1::holds, I1::description()), (I2::holds, I2::description())],
            state,
        )
    }
}

pub mod unique_positions;
pub mod unique_terms;
pub mod won_lines;

pub use unique_positions::UniquePositionsInvariant;
pub use unique_terms::UniqueTermsInvariant;
pub use won_lines::WonLinesInvariant;

/// All session invariants as a composable set.
pub type BingoInvariants = (
    UniquePositionsInvariant,
    UniqueTermsInvariant,
    WonLinesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Grid, TermCatalog};

    fn sample() -> GameSession {
        let catalog = TermCatalog::builtin();
        let grid = Grid::in_catalog_order(&catalog);
        GameSession::from_grid(catalog, grid).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(BingoInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_toggles() {
        let mut session = sample();
        for index in [0, 1, 2, 3, 4, 12, 24] {
            session.toggle_tile(index).unwrap();
        }
        assert!(BingoInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut session = sample();
        session.grid.tiles[1].term = session.grid.tiles[0].term.clone();
        session.grid.tiles[3].position = session.grid.tiles[2].position;

        let violations = BingoInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type GridOnly = (UniquePositionsInvariant, UniqueTermsInvariant);
        assert!(GridOnly::check_all(&sample()).is_ok());
    }
}
