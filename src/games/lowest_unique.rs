//! The simultaneous numeric game: lowest unique value wins the round.
//!
//! Every round each of the `N` players submits one value in `1..=N`.
//! Among the values chosen exactly once, the lowest scores its player
//! that many points; when no value is unique nobody scores. The match
//! runs a fixed number of base rounds, then tie-break rounds until one
//! player holds the highest cumulative score alone.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// Append-only log of completed rounds.
///
/// A `None` entry marks a player who forfeited that round: the slot is
/// excluded from the uniqueness tally and can never score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vec<Vec<Option<u32>>>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// True before the first round resolves.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Completed rounds, oldest first.
    pub fn rounds(&self) -> &[Vec<Option<u32>>] {
        &self.rounds
    }

    /// Appends a resolved round.
    pub(crate) fn push_round(&mut self, round: Vec<Option<u32>>) {
        self.rounds.push(round);
    }
}

/// Checks a submitted value against the legal range `1..=player_count`.
///
/// # Errors
///
/// Returns [`MoveError::ChoiceOutOfRange`] when outside the range.
pub fn validate_choice(value: u32, player_count: u32) -> Result<(), MoveError> {
    if (1..=player_count).contains(&value) {
        Ok(())
    } else {
        Err(MoveError::ChoiceOutOfRange {
            value,
            max: player_count,
        })
    }
}

/// The round's winner: the player whose value is the lowest among the
/// values that occur exactly once. Returns `(player_index, value)`.
///
/// "Lowest unique" is by value order, not submission order; unique
/// values are distinct by definition, so the minimum is unambiguous.
pub fn round_winner(round: &[Option<u32>]) -> Option<(usize, u32)> {
    round
        .iter()
        .enumerate()
        .filter_map(|(player, choice)| choice.map(|value| (player, value)))
        .filter(|&(_, value)| round.iter().flatten().filter(|&&v| v == value).count() == 1)
        .min_by_key(|&(_, value)| value)
}

/// Cumulative scores over the whole history: each round's winner gains
/// points equal to their chosen value.
pub fn scores(history: &History, player_count: usize) -> Vec<u64> {
    let mut totals = vec![0u64; player_count];
    for round in history.rounds() {
        if let Some((player, value)) = round_winner(round) {
            totals[player] += u64::from(value);
        }
    }
    totals
}

/// The index of the strictly highest score, or `None` when the top
/// score is shared and the match must continue.
pub fn sole_leader(scores: &[u64]) -> Option<usize> {
    let best = *scores.iter().max()?;
    let mut leaders = scores.iter().enumerate().filter(|(_, s)| **s == best);
    let (index, _) = leaders.next()?;
    leaders.next().is_none().then_some(index)
}
