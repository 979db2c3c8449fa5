//! Win-state invariant: cached lines match the selection.

use super::Invariant;
use crate::rules;
use crate::session::GameSession;

/// Invariant: `won_lines` equals a fresh detection pass over the selection.
pub struct WonLinesInvariant;

impl Invariant<GameSession> for WonLinesInvariant {
    fn holds(session: &GameSession) -> bool {
        let expected = rules::detect(&session.grid().selected_positions());
        session.won_lines() == expected.as_slice()
    }

    fn description() -> &'static str {
        "Won lines are exactly the lines covered by the selection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineKind, WinningLine};

    #[test]
    fn test_holds_after_win() {
        let mut session = GameSession::new();
        for index in [2, 7, 12, 17, 22] {
            session.toggle_tile(index).unwrap();
        }
        assert!(WonLinesInvariant::holds(&session));
    }

    #[test]
    fn test_stale_cache_violates() {
        let mut session = GameSession::new();
        session
            .won_lines
            .push(WinningLine::new(LineKind::Row(0)).unwrap());
        assert!(!WonLinesInvariant::holds(&session));
    }
}
