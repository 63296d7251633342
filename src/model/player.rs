use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::stats::GameStats;

/// Unique identifier for a player, stable for the player's lifetime.
pub type PlayerId = Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub games: Vec<GameStats>,
}

impl Player {
    /// Create a new player with a fresh id and an empty game history.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            games: Vec::new(),
        }
    }
}
