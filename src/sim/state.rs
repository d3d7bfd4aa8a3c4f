//! Game state and core simulation types
//!
//! One `GameState` exists per run; it owns the ring, the cursor into it and
//! the score table, and is advanced one marble at a time by [`super::tick`].

use serde::{Deserialize, Serialize};

use super::ring::{Position, Ring};
use crate::config::GameConfig;
use crate::error::RingError;
use crate::scores::ScoreTable;

/// Upper bound on ring slots reserved up front; larger games grow on demand
pub const MAX_PREALLOCATED_SLOTS: usize = 1 << 24;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Marbles left to play
    Playing,
    /// Last marble has been played
    Finished,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) config: GameConfig,
    pub(super) ring: Ring,
    /// Most recently placed marble, or the successor of the last removed one
    pub(super) cursor: Position,
    /// Marble to be played on the next tick
    pub(super) next_marble: u32,
    pub(super) phase: GamePhase,
    pub(super) scores: ScoreTable,
    pub(super) turns: u32,
}

impl GameState {
    /// Start a game with marble 0 alone in the circle
    pub fn new(config: GameConfig) -> Self {
        // Special turns shrink the ring, so last_marble + 1 is an upper bound
        let capacity = (config.last_marble() as usize + 1).min(MAX_PREALLOCATED_SLOTS);
        let ring = Ring::with_capacity(capacity, 0);
        let cursor = ring.head();
        let phase = if config.last_marble() == 0 {
            GamePhase::Finished
        } else {
            GamePhase::Playing
        };

        Self {
            config,
            ring,
            cursor,
            next_marble: 1,
            phase,
            scores: ScoreTable::new(),
            turns: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Value of the marble under the cursor
    pub fn current_marble(&self) -> Option<u32> {
        self.ring.value(self.cursor)
    }

    pub fn next_marble(&self) -> u32 {
        self.next_marble
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Number of marbles played so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Player credited for `marble`
    #[inline]
    pub fn player_for(&self, marble: u32) -> u32 {
        marble % self.config.player_count()
    }

    /// Circle contents clockwise, starting from the current marble
    pub fn circle(&self) -> Result<Vec<u32>, RingError> {
        self.ring.values_from(self.cursor)
    }
}
