//! One-shot card rendering for the `card` command.

use crate::settings::BingoSettings;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_bingo::Grid;
use tracing::{info, instrument};

/// Deals a card from `settings` and renders it as a text table or pretty JSON.
///
/// A seed in the settings makes the card reproducible.
#[instrument(skip(settings))]
pub fn render_card(settings: &BingoSettings, json: bool) -> Result<String> {
    let catalog = settings.catalog()?;
    let grid = match settings.seed() {
        Some(seed) => Grid::shuffled_with(&catalog, &mut StdRng::seed_from_u64(*seed)),
        None => Grid::new_game(&catalog),
    };
    info!(json, seeded = settings.seed().is_some(), "Rendering card");

    if json {
        Ok(serde_json::to_string_pretty(&grid)?)
    } else {
        Ok(grid.display())
    }
}
