//! Bundled default dataset.

use serde::Deserialize;
use thiserror::Error;

use super::models::GameSeed;

const GAMES_FIXTURE: &str = include_str!("../../data/games.yml");

/// Errors loading the bundled dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// YAML parsing error.
    #[error("Failed to parse bundled game dataset: {0}")]
    Yaml(#[from] serde_norway::Error),
}

#[derive(Debug, Deserialize)]
struct GamesFixture {
    games: Vec<GameSeed>,
}

/// Parse the bundled default games shipped with the storefront.
///
/// # Errors
///
/// Returns a [`SeedError`] if the bundled YAML does not parse.
pub fn default_games() -> Result<Vec<GameSeed>, SeedError> {
    let fixture: GamesFixture = serde_norway::from_str(GAMES_FIXTURE)?;

    Ok(fixture.games)
}
