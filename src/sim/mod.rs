//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No I/O inside the turn loop
//! - Ring navigation follows slot links, never raw index arithmetic
//! - Player credited for a marble is always `marble % player_count`

pub mod ring;
pub mod state;
pub mod tick;

pub use ring::{Position, Ring};
pub use state::{GamePhase, GameState, MAX_PREALLOCATED_SLOTS};
pub use tick::{GameReport, TurnOutcome, find_high_score, play, tick};
