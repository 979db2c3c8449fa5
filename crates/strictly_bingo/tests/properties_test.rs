//! Property tests for positions, line detection and toggling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strictly_bingo::{
    CELL_COUNT, GameSession, Grid, GridPosition, LineKind, TermCatalog, count_lines, detect,
    has_any_line, has_line,
};

fn selection(indices: &[usize]) -> HashSet<GridPosition> {
    indices
        .iter()
        .filter_map(|&i| GridPosition::from_index(i))
        .collect()
}

proptest! {
    #[test]
    fn test_index_round_trip(index in 0usize..CELL_COUNT) {
        let position = GridPosition::from_index(index).unwrap();
        prop_assert_eq!(position.to_index(), index);
        prop_assert_eq!(GridPosition::new(position.row(), position.column()), Some(position));
    }

    #[test]
    fn test_out_of_range_index(index in CELL_COUNT..1000usize) {
        prop_assert!(GridPosition::from_index(index).is_none());
    }

    #[test]
    fn test_detect_is_pure(indices in prop::collection::vec(0usize..CELL_COUNT, 0..25)) {
        let selected = selection(&indices);
        let first = detect(&selected);
        let second = detect(&selected);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(count_lines(&selected), first.len());
        prop_assert_eq!(has_any_line(&selected), !first.is_empty());
    }

    #[test]
    fn test_detected_lines_are_covered(indices in prop::collection::vec(0usize..CELL_COUNT, 0..25)) {
        let selected = selection(&indices);
        let lines = detect(&selected);
        for line in &lines {
            prop_assert!(line.cells().iter().all(|c| selected.contains(c)));
            prop_assert!(has_line(line.kind(), &selected));
        }
        let kinds: HashSet<LineKind> = lines.iter().map(|l| l.kind()).collect();
        prop_assert_eq!(kinds.len(), lines.len());
    }

    #[test]
    fn test_toggle_twice_restores(seed in any::<u64>(), index in 0usize..CELL_COUNT) {
        let mut session = GameSession::with_rng(TermCatalog::builtin(), &mut StdRng::seed_from_u64(seed));
        let before = session.grid().clone();
        session.toggle_tile(index).unwrap();
        session.toggle_tile(index).unwrap();
        prop_assert_eq!(session.grid(), &before);
        prop_assert!(session.won_lines().is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation(seed in any::<u64>()) {
        let catalog = TermCatalog::builtin();
        let grid = Grid::shuffled_with(&catalog, &mut StdRng::seed_from_u64(seed));
        let mut shuffled: Vec<&str> = grid.tiles().iter().map(|t| t.term()).collect();
        let mut original: Vec<&str> = catalog.all_terms().iter().map(String::as_str).collect();
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }
}

#[test]
fn test_lines_reported_in_fixed_order() {
    let all: Vec<usize> = (0..CELL_COUNT).collect();
    let kinds: Vec<LineKind> = detect(&selection(&all)).iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, LineKind::ALL.to_vec());
}
