use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::model::player::{Player, PlayerId};
use crate::model::stats::GameStats;

/// Current roster snapshot, shared across actix workers. Mutations build a
/// successor snapshot and swap it in under the write lock, so a reader
/// never observes a half-applied change.
pub type SharedRoster = Arc<RwLock<Roster>>;

/// The authoritative set of players and their game histories. Player order
/// is insertion order; ids are pairwise distinct.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Append a new player with the trimmed name. A blank name leaves the
    /// roster unchanged, same as the form UI.
    #[must_use]
    pub fn add_player(&self, name: &str) -> Roster {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self.clone();
        }

        let mut next = self.clone();
        next.players.push(Player::new(trimmed));
        next
    }

    /// Remove the player with this id. Removing an id nobody has is a
    /// no-op; deletion is idempotent.
    #[must_use]
    pub fn remove_player(&self, id: PlayerId) -> Roster {
        let mut next = self.clone();
        next.players.retain(|p| p.id != id);
        next
    }

    /// Append a game to the identified player's history, preserving all
    /// prior games and their order.
    ///
    /// # Errors
    ///
    /// Will return `AppError::NotFound` if no player carries `id`; every
    /// history is left untouched in that case.
    pub fn append_game(&self, id: PlayerId, stats: GameStats) -> Result<Roster, AppError> {
        let mut next = self.clone();
        match next.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.games.push(stats);
                Ok(next)
            }
            None => Err(AppError::NotFound(format!("player {id}"))),
        }
    }
}
