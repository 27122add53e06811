//! Turn engine: drives matches to completion through solicit, validate,
//! retry, forfeit and terminal detection.
//!
//! [`duel`] runs the alternating two-player games; [`rounds`] runs the
//! simultaneous numeric game. Both share [`solicit`], the retry loop
//! that turns an unreliable player into either an admitted move or a
//! forfeit.

pub mod duel;
pub mod rounds;

use crate::error::{EngineError, MoveError, PlayerError};
use crate::players::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One of the two sides of an alternating game.
///
/// Games attach their own labels (X/O, black/white); the engine only
/// knows that sides alternate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The side that moves first.
    First,
    /// The side that moves second.
    Second,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Index into two-element player arrays.
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Result of a finished duel match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side won.
    Won(Side),
    /// Neither side won.
    Draw,
}

/// Asks `player` for a move until one is admitted or `attempts` runs out.
///
/// Each attempt hands the player a fresh clone of `view`, never a live
/// reference, and feeds the proposal to `admit`, which validates (and,
/// for board games, atomically applies) it. A timeout, strategy error,
/// panic or rejected move all consume exactly one attempt.
///
/// Returns `Ok(None)` when every attempt was consumed: the forfeit is
/// the caller's to interpret (lost match, lost round).
///
/// # Errors
///
/// A fatal [`PlayerError`] aborts the match.
pub(crate) async fn solicit<V, M, T>(
    player: &mut (dyn Player<View = V, Move = M> + '_),
    attempts: u32,
    view: V,
    mut admit: impl FnMut(M) -> Result<T, MoveError>,
) -> Result<Option<T>, EngineError>
where
    V: Clone + Send + 'static,
    M: Send + std::fmt::Debug + 'static,
{
    for attempt in 1..=attempts {
        match player.propose(view.clone()).await {
            Ok(proposal) => {
                debug!(player = player.name(), ?proposal, attempt, "move proposed");
                match admit(proposal) {
                    Ok(admitted) => return Ok(Some(admitted)),
                    Err(reason) => {
                        warn!(player = player.name(), %reason, attempt, "invalid move");
                    }
                }
            }
            Err(fault) if fault.is_fatal() => {
                return Err(EngineError::from_fatal(player.name(), &fault));
            }
            Err(fault) => {
                warn!(player = player.name(), %fault, attempt, "player fault");
                report_fault(&fault);
            }
        }
        if attempt < attempts {
            info!(player = player.name(), next_attempt = attempt + 1, "soliciting again");
        }
    }

    info!(player = player.name(), attempts, "attempts exhausted, forfeiting");
    Ok(None)
}

fn report_fault(fault: &PlayerError) {
    // Timeouts and strategy failures share the retry bucket; keep the
    // distinction visible in the logs for bot authors.
    match fault {
        PlayerError::Timeout(budget) => {
            info!(budget_ms = budget.as_millis() as u64, "move request timed out");
        }
        PlayerError::Panicked(_) | PlayerError::Strategy(_) => {
            info!("strategy misbehaved, treating as invalid move");
        }
        PlayerError::InputClosed(_) | PlayerError::Scheduling(_) => {}
    }
}
