//! Tests for the bingo session lifecycle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strictly_bingo::{
    CELL_COUNT, GameSession, Grid, GridError, GridPosition, LineKind, SessionPhase, TermCatalog,
};

fn layout(session: &GameSession) -> Vec<(GridPosition, String)> {
    session
        .tiles()
        .iter()
        .map(|tile| (tile.position(), tile.term().to_string()))
        .collect()
}

#[test]
fn test_new_game_shape() {
    let session = GameSession::new();
    let tiles = session.tiles();

    assert_eq!(tiles.len(), CELL_COUNT);
    let positions: HashSet<_> = tiles.iter().map(|t| t.position()).collect();
    let terms: HashSet<_> = tiles.iter().map(|t| t.term()).collect();
    assert_eq!(positions.len(), CELL_COUNT);
    assert_eq!(terms.len(), CELL_COUNT);
    assert!(tiles.iter().all(|t| !t.is_selected()));
    assert!(!session.is_won());
    assert_eq!(session.phase(), SessionPhase::Playing);
}

#[test]
fn test_top_row_scenario() {
    let mut session = GameSession::new();

    for column in 0..5 {
        let position = GridPosition::new(0, column).unwrap();
        session.toggle_tile(position.to_index()).unwrap();
    }

    assert!(session.is_won());
    let kinds: Vec<_> = session.won_lines().iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, vec![LineKind::Row(0)]);
    assert_eq!(session.selected_count(), 5);
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut session = GameSession::new();
    let before = layout(&session);

    session.toggle_tile(17).unwrap();
    assert!(session.tiles()[17].is_selected());
    session.toggle_tile(17).unwrap();

    assert!(!session.tiles()[17].is_selected());
    assert_eq!(layout(&session), before);
    assert_eq!(session.selected_count(), 0);
}

#[test]
fn test_reset_keeps_layout() {
    let mut session = GameSession::new();
    let before = layout(&session);
    for index in [0, 6, 12, 18, 24, 3] {
        session.toggle_tile(index).unwrap();
    }
    assert!(session.is_won());

    session.reset_current_game();

    assert_eq!(layout(&session), before);
    assert_eq!(session.selected_count(), 0);
    assert!(session.won_lines().is_empty());
    assert!(!session.is_won());
}

#[test]
fn test_new_game_reshuffles_and_clears() {
    let catalog = TermCatalog::builtin();
    let mut session = GameSession::with_rng(catalog, &mut StdRng::seed_from_u64(1));
    for index in 0..5 {
        session.toggle_tile(index).unwrap();
    }
    let before = layout(&session);

    session.new_game_with(&mut StdRng::seed_from_u64(2));

    assert_ne!(layout(&session), before);
    assert_eq!(session.selected_count(), 0);
    assert!(!session.is_won());
}

#[test]
fn test_out_of_range_toggle_is_rejected() {
    let mut session = GameSession::new();
    let before = layout(&session);

    let result = session.toggle_tile(CELL_COUNT);

    assert_eq!(result.unwrap_err(), GridError::IndexOutOfRange(CELL_COUNT));
    assert_eq!(layout(&session), before);
    assert_eq!(session.selected_count(), 0);
}

#[test]
fn test_multiple_lines_at_once() {
    let catalog = TermCatalog::builtin();
    let grid = Grid::in_catalog_order(&catalog);
    let mut session = GameSession::from_grid(catalog, grid).unwrap();

    // Row 2 and column 2 share the center; marking it last completes both.
    for index in [10, 11, 13, 14, 2, 7, 17, 22] {
        assert!(!session.toggle_tile(index).unwrap().is_new_win());
    }
    let outcome = session.toggle_tile_at(GridPosition::CENTER).unwrap();

    assert!(outcome.is_new_win());
    let kinds: Vec<_> = outcome.completed().iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, vec![LineKind::Row(2), LineKind::Column(2)]);
    assert_eq!(session.status_text(), "MULTIPLE BINGOS!");
}

#[test]
fn test_custom_catalog_session() {
    let terms: Vec<String> = (1..=25).map(|i| format!("Event {}", i)).collect();
    let catalog = TermCatalog::new(terms).unwrap();
    let session = GameSession::with_catalog(catalog);

    assert!(session.tiles().iter().all(|t| t.term().starts_with("Event ")));
}

#[test]
fn test_card_from_another_catalog_is_rejected() {
    let builtin = TermCatalog::builtin();
    let terms: Vec<String> = (1..=25).map(|i| format!("Event {}", i)).collect();
    let custom = TermCatalog::new(terms).unwrap();

    let result = GameSession::from_grid(custom, Grid::in_catalog_order(&builtin));

    assert!(matches!(result, Err(GridError::InvariantViolation(_))));
}

#[test]
fn test_card_with_marks_keeps_its_lines() {
    let catalog = TermCatalog::builtin();
    let mut grid = Grid::in_catalog_order(&catalog);
    for column in 0..5 {
        grid.toggle_cell(3, column).unwrap();
    }

    let session = GameSession::from_grid(catalog, grid).unwrap();

    assert_eq!(session.won_lines()[0].kind(), LineKind::Row(3));
    assert_eq!(session.phase(), SessionPhase::Won);
}
