//! Turn processing
//!
//! Each call to [`tick`] plays exactly one marble.

use serde::Serialize;

use super::ring::Position;
use super::state::{GamePhase, GameState};
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::SimError;
use crate::scores::ScoreTable;

/// What happened during a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Marble inserted into the circle
    Placed { marble: u32, position: Position },
    /// Marble kept and another removed, both credited to `player`
    Scored {
        player: u32,
        marble: u32,
        removed: u32,
        points: u64,
    },
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub config: GameConfig,
    pub high_score: u64,
    /// Player holding the high score (None if nobody scored)
    pub winner: Option<u32>,
    pub scores: ScoreTable,
    pub turns: u32,
}

/// Play the next marble
///
/// Returns `Ok(None)` once the game is finished.
pub fn tick(state: &mut GameState) -> Result<Option<TurnOutcome>, SimError> {
    if state.phase == GamePhase::Finished {
        return Ok(None);
    }

    let marble = state.next_marble;
    let outcome = if marble % SPECIAL_MULTIPLE == 0 {
        score_marble(state, marble)?
    } else {
        place_marble(state, marble)?
    };

    state.turns += 1;
    if marble == state.config.last_marble() {
        state.phase = GamePhase::Finished;
    } else {
        state.next_marble = marble + 1;
    }

    Ok(Some(outcome))
}

fn place_marble(state: &mut GameState, marble: u32) -> Result<TurnOutcome, SimError> {
    let wrap = |e| SimError::turn(marble, e);

    let at = state.ring.step(state.cursor, PLACEMENT_OFFSET).map_err(wrap)?;
    let position = state.ring.insert_after(at, marble).map_err(wrap)?;
    state.cursor = position;

    Ok(TurnOutcome::Placed { marble, position })
}

fn score_marble(state: &mut GameState, marble: u32) -> Result<TurnOutcome, SimError> {
    let wrap = |e| SimError::turn(marble, e);

    let victim = state.ring.step(state.cursor, -REMOVAL_OFFSET).map_err(wrap)?;
    // Removal invalidates `victim`, so find its successor first
    let successor = state.ring.step(victim, 1).map_err(wrap)?;
    let removed = state.ring.remove(victim).map_err(wrap)?;
    state.cursor = successor;

    let player = state.player_for(marble);
    let points = u64::from(marble) + u64::from(removed);
    let total = state.scores.credit(player, points);
    log::trace!(
        "Marble {}: player {} removes {} for {} points (total {})",
        marble,
        player,
        removed,
        points,
        total
    );

    Ok(TurnOutcome::Scored {
        player,
        marble,
        removed,
        points,
    })
}

/// Run a full game and collect the result
pub fn play(config: GameConfig) -> Result<GameReport, SimError> {
    log::info!(
        "Playing {} players, last marble {}",
        config.player_count(),
        config.last_marble()
    );

    let mut state = GameState::new(config);
    let mut scoring_turns = 0u32;
    while let Some(outcome) = tick(&mut state)? {
        if matches!(outcome, TurnOutcome::Scored { .. }) {
            scoring_turns += 1;
        }
    }

    log::debug!(
        "Finished after {} turns: {} scoring turns, {} marbles left in the circle",
        state.turns,
        scoring_turns,
        state.ring.len()
    );

    let report = GameReport {
        config,
        high_score: state.scores.high_score(),
        winner: state.scores.winner(),
        turns: state.turns,
        scores: state.scores,
    };
    log::info!("High score {} (player {:?})", report.high_score, report.winner);
    Ok(report)
}

/// Highest score reached by any player
pub fn find_high_score(config: GameConfig) -> Result<u64, SimError> {
    play(config).map(|report| report.high_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use proptest::prelude::*;

    fn config(players: u32, last_marble: u32) -> GameConfig {
        GameConfig::new(players, last_marble).unwrap()
    }

    /// Circle as printed in the puzzle: clockwise from marble 0
    fn from_zero(state: &GameState) -> Vec<u32> {
        state.ring().values_from(state.ring().head()).unwrap()
    }

    #[test]
    fn test_first_turns_match_walkthrough() {
        let mut state = GameState::new(config(9, 25));
        let expected: [&[u32]; 4] = [&[0, 1], &[0, 2, 1], &[0, 2, 1, 3], &[0, 4, 2, 1, 3]];

        for (i, circle) in expected.iter().enumerate() {
            let marble = i as u32 + 1;
            let outcome = tick(&mut state).unwrap();
            assert!(matches!(outcome, Some(TurnOutcome::Placed { marble: m, .. }) if m == marble));
            assert_eq!(from_zero(&state), circle.to_vec());
            assert_eq!(state.current_marble(), Some(marble));
        }
    }

    #[test]
    fn test_special_turn_matches_walkthrough() {
        let mut state = GameState::new(config(9, 25));
        for _ in 1..=22 {
            tick(&mut state).unwrap();
        }
        assert_eq!(
            from_zero(&state),
            vec![0, 16, 8, 17, 4, 18, 9, 19, 2, 20, 10, 21, 5, 22, 11, 1, 12, 6, 13, 3, 14, 7, 15]
        );

        let outcome = tick(&mut state).unwrap();
        assert_eq!(
            outcome,
            Some(TurnOutcome::Scored {
                player: 5,
                marble: 23,
                removed: 9,
                points: 32,
            })
        );
        assert_eq!(state.current_marble(), Some(19));
        assert_eq!(
            from_zero(&state),
            vec![0, 16, 8, 17, 4, 18, 19, 2, 20, 10, 21, 5, 22, 11, 1, 12, 6, 13, 3, 14, 7, 15]
        );

        tick(&mut state).unwrap();
        tick(&mut state).unwrap();
        assert_eq!(
            from_zero(&state),
            vec![0, 16, 8, 17, 4, 18, 19, 2, 24, 20, 25, 10, 21, 5, 22, 11, 1, 12, 6, 13, 3, 14, 7, 15]
        );
        assert_eq!(state.current_marble(), Some(25));
        assert!(state.is_finished());
        assert_eq!(tick(&mut state).unwrap(), None);
        assert_eq!(state.turns(), 25);
    }

    #[test]
    fn test_reference_scores() {
        let cases = [
            (9, 25, 32),
            (10, 1618, 8317),
            (13, 7999, 146373),
            (17, 1104, 2764),
            (21, 6111, 54718),
            (30, 5807, 37305),
        ];
        for (players, last_marble, high_score) in cases {
            assert_eq!(
                find_high_score(config(players, last_marble)).unwrap(),
                high_score,
                "{} players, last marble {}",
                players,
                last_marble
            );
        }
    }

    #[test]
    fn test_report_for_short_game() {
        let report = play(config(9, 25)).unwrap();
        assert_eq!(report.high_score, 32);
        assert_eq!(report.winner, Some(5));
        assert_eq!(report.turns, 25);
        assert_eq!(report.scores.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["high_score"], 32);
        assert_eq!(json["scores"]["5"], 32);
        assert_eq!(json["config"]["player_count"], 9);
    }

    #[test]
    fn test_no_special_turn_scores_zero() {
        for last_marble in [0, 1, 22] {
            let report = play(config(4, last_marble)).unwrap();
            assert_eq!(report.high_score, 0);
            assert_eq!(report.winner, None);
            assert_eq!(report.turns, last_marble);
        }
    }

    #[test]
    fn test_single_player_takes_everything() {
        let report = play(config(1, 1618)).unwrap();
        assert_eq!(report.winner, Some(0));
        assert_eq!(report.scores.len(), 1);
    }

    #[test]
    fn test_part_two_scales_last_marble() {
        let base = config(9, 25);
        let part2 = base.for_variant(Variant::Part2).unwrap();
        let report = play(part2).unwrap();
        assert_eq!(report.turns, 2500);
        assert!(report.high_score >= 32);
    }

    proptest! {
        #[test]
        fn prop_runs_exactly_last_marble_turns(players in 1u32..50, last_marble in 0u32..1500) {
            let report = play(config(players, last_marble)).unwrap();
            prop_assert_eq!(report.turns, last_marble);
            prop_assert_eq!(report.high_score, report.scores.high_score());
        }

        #[test]
        fn prop_deterministic(players in 1u32..50, last_marble in 0u32..1500) {
            let first = play(config(players, last_marble)).unwrap();
            let second = play(config(players, last_marble)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_ring_size_tracks_turns(players in 1u32..50, last_marble in 0u32..1000) {
            let mut state = GameState::new(config(players, last_marble));
            while tick(&mut state).unwrap().is_some() {
                let m = state.turns() as usize;
                let special = m / SPECIAL_MULTIPLE as usize;
                prop_assert_eq!(state.ring().len(), 1 + m - 2 * special);
            }
        }

        #[test]
        fn prop_scores_only_move_on_special_turns(players in 1u32..30, last_marble in 0u32..1000) {
            let mut state = GameState::new(config(players, last_marble));
            loop {
                let before = state.scores().clone();
                let marble = state.next_marble();
                if tick(&mut state).unwrap().is_none() {
                    break;
                }
                for player in 0..players {
                    let (old, new) = (before.get(player), state.scores().get(player));
                    prop_assert!(new >= old);
                    if new != old {
                        prop_assert_eq!(marble % SPECIAL_MULTIPLE, 0);
                        prop_assert_eq!(marble % players, player);
                    }
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_part_two_never_lowers_high_score(players in 1u32..40, last_marble in 0u32..300) {
            let base = config(players, last_marble);
            let part1 = find_high_score(base).unwrap();
            let part2 = find_high_score(base.for_variant(Variant::Part2).unwrap()).unwrap();
            prop_assert!(part2 >= part1);
        }
    }
}
