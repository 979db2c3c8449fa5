//! Term invariant: the card carries each catalog term exactly once.

use super::Invariant;
use crate::session::GameSession;
use std::collections::HashSet;

/// Invariant: tile terms are a permutation of the session's catalog.
pub struct UniqueTermsInvariant;

impl Invariant<GameSession> for UniqueTermsInvariant {
    fn holds(session: &GameSession) -> bool {
        let catalog = session.catalog();
        let terms: HashSet<&str> = session.tiles().iter().map(|tile| tile.term()).collect();

        session.tiles().len() == catalog.len()
            && terms.len() == catalog.len()
            && terms.iter().all(|term| catalog.contains(term))
    }

    fn description() -> &'static str {
        "Each catalog term appears on exactly one tile"
    }
}
