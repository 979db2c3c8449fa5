//! Line detection over a set of selected positions.

use super::line::{LineKind, WinningLine};
use crate::position::GridPosition;
use std::collections::HashSet;
use tracing::instrument;

/// Returns every fully selected line.
///
/// Only the 12 fixed candidate lines of a 5x5 card are checked, in order:
/// rows ascending, columns ascending, main diagonal, anti-diagonal.
/// A line counts only when all five of its cells are selected.
#[instrument(skip(selected), fields(selected = selected.len()))]
pub fn detect(selected: &HashSet<GridPosition>) -> Vec<WinningLine> {
    LineKind::ALL
        .iter()
        .filter_map(|&kind| WinningLine::new(kind))
        .filter(|line| line.is_covered_by(selected))
        .collect()
}

/// Checks if any line is complete.
pub fn has_any_line(selected: &HashSet<GridPosition>) -> bool {
    !detect(selected).is_empty()
}

/// Number of complete lines.
pub fn count_lines(selected: &HashSet<GridPosition>) -> usize {
    detect(selected).len()
}

/// Checks if a specific line is complete.
pub fn has_line(kind: LineKind, selected: &HashSet<GridPosition>) -> bool {
    detect(selected).iter().any(|line| line.kind() == kind)
}

/// Human-readable summary of the complete lines, for logs and debugging.
pub fn describe(selected: &HashSet<GridPosition>) -> String {
    let lines = detect(selected);
    if lines.is_empty() {
        return "No winning lines".to_string();
    }

    let descriptions: Vec<String> = lines.iter().map(ToString::to_string).collect();
    format!("Winning lines: {}", descriptions.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::GRID_SIZE;

    fn select(cells: &[(usize, usize)]) -> HashSet<GridPosition> {
        cells
            .iter()
            .map(|&(row, column)| GridPosition::new(row, column).unwrap())
            .collect()
    }

    fn kinds(lines: &[WinningLine]) -> Vec<LineKind> {
        lines.iter().map(|line| line.kind()).collect()
    }

    #[test]
    fn test_empty_selection_has_no_lines() {
        assert!(detect(&HashSet::new()).is_empty());
        assert!(!has_any_line(&HashSet::new()));
    }

    #[test]
    fn test_single_row() {
        for row in 0..GRID_SIZE {
            let cells: Vec<_> = (0..GRID_SIZE).map(|column| (row, column)).collect();
            assert_eq!(kinds(&detect(&select(&cells))), vec![LineKind::Row(row)]);
        }
    }

    #[test]
    fn test_single_column() {
        let cells: Vec<_> = (0..GRID_SIZE).map(|row| (row, 1)).collect();
        assert_eq!(kinds(&detect(&select(&cells))), vec![LineKind::Column(1)]);
    }

    #[test]
    fn test_four_of_five_is_not_a_line() {
        let selected = select(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert!(detect(&selected).is_empty());
        assert!(!has_line(LineKind::DiagonalMain, &selected));
    }

    #[test]
    fn test_both_diagonals() {
        let mut cells: Vec<_> = (0..GRID_SIZE).map(|i| (i, i)).collect();
        cells.extend((0..GRID_SIZE).map(|i| (i, GRID_SIZE - 1 - i)));
        let lines = detect(&select(&cells));
        assert_eq!(
            kinds(&lines),
            vec![LineKind::DiagonalMain, LineKind::DiagonalAnti]
        );
        assert_eq!(count_lines(&select(&cells)), 2);
    }

    #[test]
    fn test_cross_has_no_diagonal() {
        let mut cells: Vec<_> = (0..GRID_SIZE).map(|column| (2, column)).collect();
        cells.extend((0..GRID_SIZE).map(|row| (row, 2)));
        assert_eq!(
            kinds(&detect(&select(&cells))),
            vec![LineKind::Row(2), LineKind::Column(2)]
        );
    }

    #[test]
    fn test_full_card_has_twelve_lines() {
        let selected: HashSet<_> = GridPosition::ALL.iter().copied().collect();
        let lines = detect(&selected);
        assert_eq!(lines.len(), 12);
        assert_eq!(kinds(&lines), LineKind::ALL.to_vec());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&HashSet::new()), "No winning lines");
        let cells: Vec<_> = (0..GRID_SIZE).map(|column| (0, column)).collect();
        assert_eq!(
            describe(&select(&cells)),
            "Winning lines: row 1: (0,0), (0,1), (0,2), (0,3), (0,4)"
        );
    }
}
