//! Error types for the marble game.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the ring itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Removing the only remaining marble would leave an empty ring
    #[error("cannot remove the last remaining item of the ring")]
    Empty,

    /// Position refers to a slot that has already been removed
    #[error("position {0} does not refer to a live ring slot")]
    StalePosition(u32),

    /// Slot indices are exhausted
    #[error("ring cannot hold more than {} slots", u32::MAX)]
    Full,
}

/// Errors raised while running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A ring operation failed while playing a marble
    #[error("ring invariant violated while playing marble {marble}")]
    Turn {
        marble: u32,
        #[source]
        source: RingError,
    },
}

impl SimError {
    /// Tags a ring failure with the marble being played.
    pub fn turn(marble: u32, source: RingError) -> Self {
        Self::Turn { marble, source }
    }
}

/// Errors raised while building a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input file could not be read
    #[error("failed to read input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input contained no game description
    #[error("input is empty")]
    MissingInput,

    /// Input contained more than one game description
    #[error("expected exactly one line of input, found {0}")]
    MultipleLines(usize),

    /// Line did not match the expected game description
    #[error("malformed game description: {0:?}")]
    Malformed(String),

    /// A number in the description did not fit
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// The game needs at least one player
    #[error("player count must be at least 1")]
    NoPlayers,

    /// Scaling the last marble overflowed
    #[error("last marble {last_marble} x {factor} overflows")]
    Overflow { last_marble: u32, factor: u32 },
}
