pub mod player;
pub mod roster;
pub mod stats;

pub use player::*;
pub use roster::*;
pub use stats::*;
