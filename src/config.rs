//! Game configuration and puzzle input parsing
//!
//! The input is a single line such as
//! `10 players; last marble is worth 1618 points`.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::PART_TWO_MULTIPLIER;
use crate::error::ConfigError;

/// Which flavor of the game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Last marble as given
    #[default]
    Part1,
    /// Last marble scaled up
    Part2,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Part1 => "part-1",
            Variant::Part2 => "part-2",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "part-1" | "part1" | "1" => Some(Variant::Part1),
            "part-2" | "part2" | "2" => Some(Variant::Part2),
            _ => None,
        }
    }

    /// Factor applied to the last marble
    pub fn multiplier(&self) -> u32 {
        match self {
            Variant::Part1 => 1,
            Variant::Part2 => PART_TWO_MULTIPLIER,
        }
    }

    pub fn all() -> [Variant; 2] {
        [Variant::Part1, Variant::Part2]
    }
}

/// Immutable parameters for one game
///
/// Only built through [`GameConfig::new`], so `player_count >= 1` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    player_count: u32,
    last_marble: u32,
}

impl GameConfig {
    /// Validate and build a config
    pub fn new(player_count: u32, last_marble: u32) -> Result<Self, ConfigError> {
        if player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        Ok(Self {
            player_count,
            last_marble,
        })
    }

    #[inline]
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    #[inline]
    pub fn last_marble(&self) -> u32 {
        self.last_marble
    }

    /// Same players, last marble multiplied by `factor`
    pub fn scaled(&self, factor: u32) -> Result<Self, ConfigError> {
        let last_marble = self
            .last_marble
            .checked_mul(factor)
            .ok_or(ConfigError::Overflow {
                last_marble: self.last_marble,
                factor,
            })?;
        Ok(Self {
            last_marble,
            ..*self
        })
    }

    /// Config for the given variant
    pub fn for_variant(&self, variant: Variant) -> Result<Self, ConfigError> {
        self.scaled(variant.multiplier())
    }

    /// Parse full input text; exactly one non-blank line is expected
    pub fn parse_input(text: &str) -> Result<Self, ConfigError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        match lines.as_slice() {
            [] => Err(ConfigError::MissingInput),
            [line] => line.parse(),
            _ => Err(ConfigError::MultipleLines(lines.len())),
        }
    }

    /// Read and parse an input file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse_input(&text)?;
        log::debug!("Loaded {:?} from {}", config, path.display());
        Ok(config)
    }
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+) players?; last marble is worth (\d+) points?$")
            .expect("line pattern is a valid regex")
    })
}

fn parse_number(digits: &str) -> Result<u32, ConfigError> {
    digits
        .parse()
        .map_err(|_| ConfigError::InvalidNumber(digits.to_string()))
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let caps = line_pattern()
            .captures(line)
            .ok_or_else(|| ConfigError::Malformed(line.to_string()))?;
        Self::new(parse_number(&caps[1])?, parse_number(&caps[2])?)
    }
}
