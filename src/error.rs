//! Error taxonomy for the arena.
//!
//! Every agent-level failure is recoverable: an invalid move, a timeout,
//! a strategy error or a panic all consume one solicitation attempt and
//! are retried until the attempt budget runs out, at which point the
//! player forfeits. Only [`EngineError`] aborts a match.

use crate::games::Coord;
use derive_more::Display;
use std::time::Duration;

/// Why a proposed move was rejected by a rule engine.
///
/// Validation is pure: re-validating the same move against the same
/// board yields the same reason. The board is never modified by a
/// rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("cell {coord} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Board side length.
        size: u8,
    },
    /// The target cell is already owned.
    #[display("cell {_0} is already occupied")]
    Occupied(Coord),
    /// A reversi placement that would flip no opposing disc.
    #[display("a disc at {_0} would not flip any opposing disc")]
    NoCaptures(Coord),
    /// A numeric choice outside `1..=player_count`.
    #[display("choice {value} is outside 1..={max}")]
    ChoiceOutOfRange {
        /// The submitted value.
        value: u32,
        /// Highest admissible value (the player count).
        max: u32,
    },
}

impl std::error::Error for MoveError {}

/// Why a player failed to produce a move at all.
#[derive(Debug, Clone, Display)]
pub enum PlayerError {
    /// The decision function did not answer within its budget.
    #[display("no response within {_0:?}")]
    Timeout(Duration),
    /// The decision function returned an error.
    #[display("strategy failed: {_0}")]
    Strategy(String),
    /// The decision function panicked.
    #[display("strategy panicked: {_0}")]
    Panicked(String),
    /// An interactive player's input stream closed.
    #[display("input closed: {_0}")]
    InputClosed(String),
    /// The runtime could not run the sandboxed call to completion.
    #[display("could not execute sandboxed call: {_0}")]
    Scheduling(String),
}

impl PlayerError {
    /// Fatal errors abort the match instead of consuming a retry.
    ///
    /// Per the failure model, only resource-level problems are fatal:
    /// a runtime that cannot host the sandboxed call, or a human whose
    /// console is gone and who therefore can never answer.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InputClosed(_) | Self::Scheduling(_))
    }
}

impl std::error::Error for PlayerError {}

/// Fatal match failure, propagated out of `play()`.
#[derive(Debug, Clone, Display)]
pub enum EngineError {
    /// The runtime could not provide an execution unit for an agent call.
    #[display("resource exhaustion: {_0}")]
    Resource(String),
    /// A player became permanently unavailable.
    #[display("player {name} unavailable: {reason}")]
    PlayerUnavailable {
        /// Display name of the player.
        name: String,
        /// What happened.
        reason: String,
    },
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Maps a fatal [`PlayerError`] onto the engine taxonomy.
    pub(crate) fn from_fatal(name: &str, fault: &PlayerError) -> Self {
        match fault {
            PlayerError::Scheduling(reason) => Self::Resource(reason.clone()),
            other => Self::PlayerUnavailable {
                name: name.to_string(),
                reason: other.to_string(),
            },
        }
    }
}
