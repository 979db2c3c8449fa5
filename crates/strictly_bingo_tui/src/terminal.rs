//! Terminal setup and the interactive event loop.

use crate::app::App;
use crate::celebrate::Bell;
use crate::settings::BingoSettings;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive board until the player quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &BingoSettings) -> Result<()> {
    let bell = Bell::new(io::stdout(), *settings.sound_enabled());
    let mut app = App::new(settings, Box::new(bell)).context("Failed to start game")?;

    info!("Starting Strictly Bingo TUI");

    enable_raw_mode()?;
    // Restores the terminal on every exit path from here on, including `?`.
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs a restore step when dropped.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}
