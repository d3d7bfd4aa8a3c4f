//! Per-player score table
//!
//! Players without any points have no entry; a missing entry reads as 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accumulated score for every player that has scored at least once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: BTreeMap<u32, u64>,
}

impl ScoreTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add points to a player and return their new total
    pub fn credit(&mut self, player: u32, points: u64) -> u64 {
        let total = self.entries.entry(player).or_insert(0);
        *total += points;
        *total
    }

    /// Score of a player (0 if they never scored)
    pub fn get(&self, player: u32) -> u64 {
        self.entries.get(&player).copied().unwrap_or(0)
    }

    /// Highest score across all players (0 if nobody scored)
    pub fn high_score(&self) -> u64 {
        self.entries.values().copied().max().unwrap_or(0)
    }

    /// Player holding the high score, lowest index on ties
    pub fn winner(&self) -> Option<u32> {
        // max_by_key returns the last maximum, so walk in reverse
        self.entries
            .iter()
            .rev()
            .max_by_key(|(_, score)| **score)
            .map(|(player, _)| *player)
    }

    /// Number of players with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody has scored yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(player, score)` in player order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.entries.iter().map(|(p, s)| (*p, *s))
    }
}
