pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod export;
    pub mod roster;
    pub mod stats;
}
pub mod view {
    pub mod index;
    pub mod roster;
}

pub use error::AppError;
pub use model::{GameStats, GameStatsForm, Player, PlayerId, Roster, SharedRoster};
