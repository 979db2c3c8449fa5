//! Keyboard handling.

use crossterm::event::KeyCode;
use strictly_bingo::{GRID_SIZE, GridPosition};
use strum::IntoEnumIterator;

/// Commands bound to keys, listed in the help bar in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum KeyAction {
    /// Mark or unmark the tile under the cursor.
    #[strum(to_string = "Space: mark")]
    Toggle,
    /// Deal a freshly shuffled card.
    #[strum(to_string = "n: new card")]
    NewGame,
    /// Clear all marks on the current card.
    #[strum(to_string = "r: reset")]
    Reset,
    /// Turn the bell on or off.
    #[strum(to_string = "s: sound")]
    ToggleSound,
    /// Leave the game.
    #[strum(to_string = "q: quit")]
    Quit,
}

impl KeyAction {
    /// Maps a key to its command, if it has one.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Self::Toggle),
            KeyCode::Char('n') => Some(Self::NewGame),
            KeyCode::Char('r') => Some(Self::Reset),
            KeyCode::Char('s') => Some(Self::ToggleSound),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Help bar text listing movement and every command.
pub fn help_line() -> String {
    let mut parts = vec!["Arrows: move".to_string()];
    parts.extend(KeyAction::iter().map(|action| action.to_string()));
    parts.join("  ")
}

/// Moves cursor based on arrow keys, stopping at the card edges.
pub fn move_cursor(cursor: GridPosition, key: KeyCode) -> GridPosition {
    let (row, column) = (cursor.row(), cursor.column());
    let last = GRID_SIZE - 1;

    let (row, column) = match key {
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(last)),
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(last), column),
        _ => (row, column),
    };

    GridPosition::new(row, column).unwrap_or(cursor)
}
