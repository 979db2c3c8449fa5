//! Application state and logic.

use crate::celebrate::{self, Celebrate};
use crate::input::{self, KeyAction};
use crate::settings::{BingoSettings, SettingsError};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use strictly_bingo::{GameSession, GridPosition};
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: GridPosition,
    status_message: String,
    sound_enabled: bool,
    rng: Option<StdRng>,
    celebrate: Box<dyn Celebrate>,
}

impl App {
    /// Creates the app and deals the first card.
    #[instrument(skip(celebrate))]
    pub fn new(
        settings: &BingoSettings,
        mut celebrate: Box<dyn Celebrate>,
    ) -> Result<Self, SettingsError> {
        let catalog = settings.catalog()?;
        let mut rng = (*settings.seed()).map(StdRng::seed_from_u64);
        let session = match rng.as_mut() {
            Some(rng) => GameSession::with_rng(catalog, rng),
            None => GameSession::with_catalog(catalog),
        };
        celebrate.set_sound(*settings.sound_enabled());

        Ok(Self {
            session,
            cursor: GridPosition::ORIGIN,
            status_message: "Mark a tile when it happens!".to_string(),
            sound_enabled: *settings.sound_enabled(),
            rng,
            celebrate,
        })
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> GridPosition {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the bell is on.
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Positions covered by any complete line.
    pub fn winning_positions(&self) -> HashSet<GridPosition> {
        self.session
            .won_lines()
            .iter()
            .flat_map(|line| line.cells().iter().copied())
            .collect()
    }

    /// Handles a key press. Returns `false` when the player quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match KeyAction::from_key(code) {
            Some(KeyAction::Toggle) => self.toggle_cursor(),
            Some(KeyAction::NewGame) => self.new_game(),
            Some(KeyAction::Reset) => self.reset(),
            Some(KeyAction::ToggleSound) => self.toggle_sound(),
            Some(KeyAction::Quit) => {
                info!("Player quit");
                return false;
            }
            None => self.cursor = input::move_cursor(self.cursor, code),
        }
        true
    }

    /// Marks or unmarks the tile under the cursor.
    pub fn toggle_cursor(&mut self) {
        let outcome = match self.session.toggle_tile_at(self.cursor) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Toggle rejected");
                self.status_message = format!("Toggle error: {}", e);
                return;
            }
        };

        celebrate::notify(self.celebrate.as_mut(), &outcome);

        self.status_message = if outcome.is_new_win() {
            let names: Vec<String> = outcome
                .completed()
                .iter()
                .map(|line| line.kind().display_name())
                .collect();
            format!("{} Completed {}", self.session.status_text(), names.join(", "))
        } else {
            self.session.status_text()
        };
        debug!(status = %self.status_message, "Status updated");
    }

    /// Deals a freshly shuffled card.
    pub fn new_game(&mut self) {
        match self.rng.as_mut() {
            Some(rng) => self.session.new_game_with(rng),
            None => self.session.new_game(),
        }
        self.cursor = GridPosition::ORIGIN;
        self.status_message = "New card dealt. Good luck!".to_string();
    }

    /// Clears every mark on the current card.
    pub fn reset(&mut self) {
        self.session.reset_current_game();
        self.status_message = "Card cleared.".to_string();
    }

    /// Turns the bell on or off.
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        self.celebrate.set_sound(self.sound_enabled);
        self.status_message = if self.sound_enabled {
            "Sound on.".to_string()
        } else {
            "Sound off.".to_string()
        };
    }
}
