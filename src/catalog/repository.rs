//! Catalog repository.

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;
use tracing::{debug, info};

use crate::storage::{Store, keys};

use super::models::{Game, GameDraft, GameId, GameSeed, GameUpdate};

const ONE_DAY: SignedDuration = SignedDuration::from_secs(86_400);

/// Errors returned by catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry has the requested id.
    #[error("game not found")]
    NotFound,
}

/// CRUD surface over the catalog collection, including first-run seeding
/// and backfill of records written before creation stamps existed.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    store: Store,
}

impl CatalogRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Current catalog contents, insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Game> {
        self.store.read(keys::CATALOG)
    }

    /// Seed the catalog on first run, or migrate an existing one.
    ///
    /// Runs on every catalog load. An empty collection is populated from
    /// `defaults`, each entry stamped one day earlier than the previous so
    /// the dataset spreads out over past days. A populated collection is
    /// left as-is except for records missing a creation stamp, which get
    /// one derived from their id; existing stamps are never touched.
    pub fn seed_if_empty(&self, defaults: Vec<GameSeed>) {
        let games = self.list();

        if games.is_empty() {
            let now = Timestamp::now();

            let seeded: Vec<Game> = defaults
                .into_iter()
                .enumerate()
                .map(|(index, seed)| {
                    let age = ONE_DAY
                        .checked_mul(i32::try_from(index).unwrap_or(i32::MAX))
                        .unwrap_or(SignedDuration::MAX);

                    seed.into_game(now.saturating_sub(age).unwrap_or(Timestamp::MIN))
                })
                .collect();

            info!(count = seeded.len(), "seeded empty catalog with defaults");
            self.save(&seeded);

            return;
        }

        let mut backfilled = 0usize;

        let migrated: Vec<Game> = games
            .into_iter()
            .map(|mut game| {
                if game.created_at.is_none() {
                    // The id is a millisecond stamp from creation time, so
                    // it stands in for the missing field.
                    game.created_at = Some(
                        Timestamp::from_millisecond(game.id).unwrap_or_else(|_| Timestamp::now()),
                    );
                    backfilled += 1;
                }

                game
            })
            .collect();

        if backfilled > 0 {
            debug!(backfilled, "backfilled missing creation stamps");
            self.save(&migrated);
        }
    }

    /// Add a new listing, assigning a fresh id and creation stamp.
    ///
    /// Ids are clock-derived (milliseconds) and bumped past every existing
    /// id, so rapid successive listings stay unique.
    pub fn add(&self, draft: GameDraft) -> Game {
        let mut games = self.list();

        let now = Timestamp::now();
        let max_id = games.iter().map(|g| g.id).max().unwrap_or(0);
        let id = now.as_millisecond().max(max_id + 1);

        let game = draft.into_game(id, now);

        games.push(game.clone());
        self.save(&games);

        game
    }

    /// Merge `update` into the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record has the id.
    pub fn update(&self, id: GameId, update: GameUpdate) -> Result<Game, CatalogError> {
        let mut games = self.list();

        let Some(game) = games.iter_mut().find(|g| g.id == id) else {
            return Err(CatalogError::NotFound);
        };

        game.apply(update);
        let updated = game.clone();

        self.save(&games);

        Ok(updated)
    }

    /// Remove the record with the given id and return the remaining
    /// catalog. Removing an unknown id is a no-op.
    pub fn remove(&self, id: GameId) -> Vec<Game> {
        let mut games = self.list();

        games.retain(|g| g.id != id);
        self.save(&games);

        games
    }

    fn save(&self, games: &[Game]) {
        self.store.write(keys::CATALOG, games);
    }
}
