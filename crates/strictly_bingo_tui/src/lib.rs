//! Terminal front end for Strictly Bingo.
//!
//! The engine lives in [`strictly_bingo`]; this crate adds settings,
//! keyboard handling, rendering and the terminal bell.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod card;
mod celebrate;
mod cli;
mod input;
mod settings;
mod terminal;
mod ui;

pub use app::App;
pub use card::render_card;
pub use celebrate::{Bell, Celebrate, Silent, notify};
pub use cli::{Cli, Command};
pub use input::{KeyAction, help_line, move_cursor};
pub use settings::{BingoSettings, SettingsError};
pub use terminal::run_tui;
