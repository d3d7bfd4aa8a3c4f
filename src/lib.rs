//! Marble Mania - a circular marble placement game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ring, turn rules, game state)
//! - `scores`: Per-player score table
//! - `config`: Game configuration and input parsing
//! - `error`: Error types shared across the crate

pub mod config;
pub mod error;
pub mod scores;
pub mod sim;

pub use config::{GameConfig, Variant};
pub use error::{ConfigError, RingError, SimError};
pub use scores::ScoreTable;
pub use sim::{GameReport, find_high_score, play};

/// Game rule constants
pub mod consts {
    /// Marbles divisible by this trigger the scoring rule instead of placement
    pub const SPECIAL_MULTIPLE: u32 = 23;
    /// Counter-clockwise distance from the cursor to the marble removed on a special turn
    pub const REMOVAL_OFFSET: isize = 7;
    /// Clockwise distance from the cursor to the insertion point on an ordinary turn
    pub const PLACEMENT_OFFSET: isize = 1;
    /// Last-marble multiplier for the part 2 variant
    pub const PART_TWO_MULTIPLIER: u32 = 100;
}
