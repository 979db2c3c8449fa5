//! Side effects fired in response to game events.

use std::io::Write;
use strictly_bingo::{ToggleOutcome, WinningLine};
use tracing::{debug, info, warn};

/// Reacts to toggles and new wins.
///
/// The session only reports what changed. Implementations decide what
/// feedback, if any, the player gets.
pub trait Celebrate {
    /// Called after every successful toggle.
    fn tile_toggled(&mut self, outcome: &ToggleOutcome);

    /// Called once per toggle that increased the number of complete lines.
    fn new_win(&mut self, lines: &[WinningLine]);

    /// Turns audible feedback on or off.
    fn set_sound(&mut self, _enabled: bool) {}
}

/// Forwards a toggle outcome, firing `new_win` only for new wins.
pub fn notify(celebrate: &mut dyn Celebrate, outcome: &ToggleOutcome) {
    celebrate.tile_toggled(outcome);
    if outcome.is_new_win() {
        celebrate.new_win(outcome.completed());
    }
}

/// Rings the terminal bell: once when a tile is marked, three times on a win.
#[derive(Debug)]
pub struct Bell<W: Write> {
    writer: W,
    enabled: bool,
}

impl<W: Write> Bell<W> {
    /// Creates a bell writing to `writer`.
    pub fn new(writer: W, enabled: bool) -> Self {
        Self { writer, enabled }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ring(&mut self, times: usize) {
        if !self.enabled {
            return;
        }
        let bells = "\x07".repeat(times);
        if let Err(e) = self
            .writer
            .write_all(bells.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

impl<W: Write> Celebrate for Bell<W> {
    fn tile_toggled(&mut self, outcome: &ToggleOutcome) {
        if outcome.selected() {
            self.ring(1);
        }
    }

    fn new_win(&mut self, lines: &[WinningLine]) {
        let names: Vec<String> = lines.iter().map(|line| line.kind().display_name()).collect();
        info!(?names, "Celebrating new bingo");
        self.ring(3);
    }

    fn set_sound(&mut self, enabled: bool) {
        debug!(enabled, "Bell sound toggled");
        self.enabled = enabled;
    }
}

/// Does nothing. Used when output is not a terminal.
#[derive(Debug, Default)]
pub struct Silent;

impl Celebrate for Silent {
    fn tile_toggled(&mut self, _outcome: &ToggleOutcome) {}

    fn new_win(&mut self, _lines: &[WinningLine]) {}
}
